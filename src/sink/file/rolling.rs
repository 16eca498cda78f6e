// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs;
use std::fs::File;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::RwLock;
use std::sync::RwLockWriteGuard;
use std::time::Duration;

use jiff::Timestamp;
use jiff::Zoned;

use crate::Error;
use crate::sink::file::clock::Clock;

/// The rotation and locking skeleton shared by all file sinks.
///
/// The last write time and the active file are guarded by separate locks. The last write time
/// is refreshed before the file lock is taken, so concurrent writers arriving while one of them
/// rotates see a fresh value and do not rotate again.
///
/// File names only resolve to the second. A rotation that would reopen the active path keeps
/// appending to it instead. If opening the new file fails, the previous last write time is put
/// back so the next write retries the rotation.
#[derive(Debug)]
pub(crate) struct RollingFile {
    base_path: PathBuf,
    extension: &'static str,
    header: Option<&'static str>,
    rotation: Duration,
    clock: Clock,
    last_write: RwLock<Timestamp>,
    active: Mutex<ActiveFile>,
}

#[derive(Debug)]
struct ActiveFile {
    path: PathBuf,
    file: File,
    has_records: bool,
}

impl RollingFile {
    pub(crate) fn new(
        base_path: PathBuf,
        extension: &'static str,
        header: Option<&'static str>,
        truncate: bool,
        rotation: Duration,
        clock: Clock,
    ) -> Result<Self, Error> {
        let now = clock.now();
        let path = file_path(&base_path, extension, &now);
        let active = ActiveFile::open(path, header, truncate)?;

        Ok(Self {
            base_path,
            extension,
            header,
            rotation,
            clock,
            last_write: RwLock::new(now.timestamp()),
            active: Mutex::new(active),
        })
    }

    /// Append the bytes produced by `encode`, rotating first if the file is stale.
    ///
    /// `encode` receives whether the record is the first one in the active file.
    pub(crate) fn write_with<F>(&self, encode: F) -> Result<(), Error>
    where
        F: FnOnce(bool) -> Result<Vec<u8>, Error>,
    {
        let now = self.clock.now();
        let previous = self.touch(now.timestamp());

        let mut active = self.active();
        if self.should_rotate(previous, now.timestamp()) {
            let path = file_path(&self.base_path, self.extension, &now);
            if path != active.path {
                match ActiveFile::open(path, self.header, true) {
                    // the previous handle is closed here
                    Ok(fresh) => *active = fresh,
                    Err(err) => {
                        *self.last_write_mut() = previous;
                        return Err(err);
                    }
                }
            }
        }

        let ActiveFile {
            path,
            file,
            has_records,
        } = &mut *active;
        let bytes = encode(!*has_records)?;
        file.write_all(&bytes)
            .map_err(|err| Error::from_io_error(err).with_context("path", path.display()))?;
        *has_records = true;
        Ok(())
    }

    /// The path of the file currently written to.
    pub(crate) fn current_path(&self) -> PathBuf {
        self.active().path.clone()
    }

    pub(crate) fn flush(&self) -> Result<(), Error> {
        let mut active = self.active();
        active.file.flush().map_err(Error::from_io_error)
    }

    pub(crate) fn last_write(&self) -> Timestamp {
        *self.last_write.read().unwrap_or_else(|e| e.into_inner())
    }

    fn last_write_mut(&self) -> RwLockWriteGuard<'_, Timestamp> {
        self.last_write.write().unwrap_or_else(|e| e.into_inner())
    }

    fn touch(&self, now: Timestamp) -> Timestamp {
        std::mem::replace(&mut *self.last_write_mut(), now)
    }

    fn active(&self) -> MutexGuard<'_, ActiveFile> {
        self.active.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn should_rotate(&self, previous: Timestamp, now: Timestamp) -> bool {
        if self.rotation.is_zero() {
            return false;
        }
        let elapsed = now.duration_since(previous);
        !elapsed.is_negative() && elapsed.unsigned_abs() > self.rotation
    }
}

impl ActiveFile {
    fn open(path: PathBuf, header: Option<&str>, truncate: bool) -> Result<Self, Error> {
        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|err| {
                Error::new("failed to create log directory")
                    .with_context("path", dir.display())
                    .with_source(err)
            })?;
        }

        let mut options = OpenOptions::new();
        options.create(true);
        if truncate {
            options.write(true).truncate(true);
        } else {
            options.append(true);
        }
        let mut file = options.open(&path).map_err(|err| {
            Error::new("failed to create log file")
                .with_context("path", path.display())
                .with_source(err)
        })?;

        let has_records = if truncate {
            if let Some(header) = header {
                file.write_all(header.as_bytes()).map_err(|err| {
                    Error::new("failed to write file header")
                        .with_context("path", path.display())
                        .with_source(err)
                })?;
            }
            false
        } else {
            file.metadata().map(|meta| meta.len() > 0).unwrap_or(false)
        };

        Ok(Self {
            path,
            file,
            has_records,
        })
    }
}

/// `<base>-<year>_<month>_<day>_<hour>_<minute>_<second>.<ext>`, numbers unpadded.
pub(crate) fn file_path(base_path: &Path, extension: &str, now: &Zoned) -> PathBuf {
    let mut name = base_path.as_os_str().to_owned();
    name.push(format!(
        "-{}_{}_{}_{}_{}_{}.{}",
        now.year(),
        now.month(),
        now.day(),
        now.hour(),
        now.minute(),
        now.second(),
        extension
    ));
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;
    use std::sync::Arc;
    use std::sync::Barrier;
    use std::thread;

    use jiff::Span;
    use rand::Rng;
    use rand::distr::Alphanumeric;
    use tempfile::TempDir;

    use super::*;
    use crate::sink::file::clock::ManualClock;

    fn rolling(
        dir: &TempDir,
        header: Option<&'static str>,
        rotation: Duration,
        start: &Zoned,
    ) -> (RollingFile, ManualClock) {
        let clock = ManualClock::new(start.clone());
        let file = RollingFile::new(
            dir.path().join("nested").join("app"),
            "log",
            header,
            true,
            rotation,
            Clock::ManualClock(clock.clone()),
        )
        .unwrap();
        (file, clock)
    }

    fn write_str(file: &RollingFile, s: &str) {
        file.write_with(|_| Ok(s.as_bytes().to_vec())).unwrap();
    }

    #[test]
    fn test_file_path() {
        let now = Zoned::from_str("2024-08-01T07:05:09[UTC]").unwrap();
        let path = file_path(Path::new("logs/app"), "csv", &now);
        assert_eq!(path, PathBuf::from("logs/app-2024_8_1_7_5_9.csv"));
    }

    #[test]
    fn test_rotation_after_idle_interval() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let (file, clock) = rolling(&dir, Some("head\n"), Duration::from_secs(60), &start);
        let first_path = file.current_path();

        clock.set_now(start.checked_add(Span::new().seconds(30)).unwrap());
        write_str(&file, "one\n");
        assert_eq!(file.current_path(), first_path);

        let later = start.checked_add(Span::new().minutes(2)).unwrap();
        clock.set_now(later.clone());
        write_str(&file, "two\n");
        let second_path = file.current_path();
        assert_ne!(second_path, first_path);
        assert_eq!(file.last_write(), later.timestamp());

        assert_eq!(fs::read_to_string(&first_path).unwrap(), "head\none\n");
        assert_eq!(fs::read_to_string(&second_path).unwrap(), "head\ntwo\n");
    }

    #[test]
    fn test_zero_rotation_never_rotates() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let (file, clock) = rolling(&dir, None, Duration::ZERO, &start);
        let path = file.current_path();

        for day in 1..=3 {
            clock.set_now(start.checked_add(Span::new().days(day)).unwrap());
            write_str(&file, "x\n");
        }

        assert_eq!(file.current_path(), path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "x\nx\nx\n");
        assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);
    }

    #[test]
    fn test_first_record_flag_resets_on_rotation() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let (file, clock) = rolling(&dir, None, Duration::from_secs(1), &start);

        let mut firsts = vec![];
        for secs in [0, 0, 5, 5] {
            clock.set_now(start.checked_add(Span::new().seconds(secs)).unwrap());
            file.write_with(|first| {
                firsts.push(first);
                Ok(vec![])
            })
            .unwrap();
        }
        assert_eq!(firsts, vec![true, false, true, false]);
    }

    #[test]
    fn test_append_mode_keeps_existing_content() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let now = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let base = dir.path().join("app");
        fs::write(file_path(&base, "json", &now), "{}").unwrap();

        let clock = Clock::ManualClock(ManualClock::new(now));
        let file = RollingFile::new(base, "json", None, false, Duration::ZERO, clock).unwrap();

        let mut first = None;
        file.write_with(|f| {
            first = Some(f);
            Ok(b"!".to_vec())
        })
        .unwrap();
        assert_eq!(first, Some(false));
        assert_eq!(fs::read_to_string(file.current_path()).unwrap(), "{}!");
    }

    #[test]
    fn test_concurrent_writers_do_not_interleave() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let (file, _clock) = rolling(&dir, None, Duration::from_secs(60), &start);
        let file = Arc::new(file);

        let handles = (0..8)
            .map(|_| {
                let file = file.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        let line = format!("{}\n", generate_random_string());
                        write_str(&file, &line);
                    }
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            handle.join().unwrap();
        }

        let content = fs::read_to_string(file.current_path()).unwrap();
        let lines = content.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 800);
        assert!(lines.iter().all(|line| (50..=100).contains(&line.len())));
    }

    #[test]
    fn test_rotation_within_the_same_second_keeps_records() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00.100[UTC]").unwrap();
        let (file, clock) = rolling(&dir, Some("head\n"), Duration::from_millis(200), &start);
        let path = file.current_path();

        write_str(&file, "one\n");
        clock.set_now(start.checked_add(Span::new().milliseconds(500)).unwrap());
        write_str(&file, "two\n");

        assert_eq!(file.current_path(), path);
        assert_eq!(fs::read_to_string(&path).unwrap(), "head\none\ntwo\n");
        assert_eq!(fs::read_dir(path.parent().unwrap()).unwrap().count(), 1);

        clock.set_now(start.checked_add(Span::new().seconds(2)).unwrap());
        write_str(&file, "three\n");
        assert_ne!(file.current_path(), path);
        assert_eq!(fs::read_to_string(file.current_path()).unwrap(), "head\nthree\n");
    }

    #[test]
    fn test_failed_rotation_is_retried() {
        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let (file, clock) = rolling(&dir, None, Duration::from_secs(60), &start);
        let first_path = file.current_path();

        // a plain file where the log directory should be
        let nested = dir.path().join("nested");
        fs::remove_dir_all(&nested).unwrap();
        fs::write(&nested, "").unwrap();

        let later = start.checked_add(Span::new().minutes(2)).unwrap();
        clock.set_now(later.clone());
        let err = file.write_with(|_| Ok(b"lost\n".to_vec())).unwrap_err();
        assert_eq!(err.message(), "failed to create log directory");
        assert_eq!(file.current_path(), first_path);
        assert_eq!(file.last_write(), start.timestamp());

        fs::remove_file(&nested).unwrap();
        write_str(&file, "kept\n");
        assert_ne!(file.current_path(), first_path);
        assert_eq!(file.last_write(), later.timestamp());
        assert_eq!(fs::read_to_string(file.current_path()).unwrap(), "kept\n");
    }

    #[test]
    fn test_concurrent_writers_rotate_once() {
        const HEADER: &str = "Event ID;Text\n";
        const THREADS: usize = 8;
        const LINES: usize = 50;

        let dir = TempDir::new().expect("failed to create a temporary directory");
        let start = Zoned::from_str("2024-08-10T00:00:00[UTC]").unwrap();
        let (file, clock) = rolling(&dir, Some(HEADER), Duration::from_secs(60), &start);
        let file = Arc::new(file);
        let first_path = file.current_path();

        let barrier = Arc::new(Barrier::new(THREADS + 1));
        let handles = (0..THREADS)
            .map(|_| {
                let file = file.clone();
                let barrier = barrier.clone();
                thread::spawn(move || {
                    for _ in 0..LINES {
                        write_str(&file, &format!("{}\n", generate_random_string()));
                    }
                    // the clock moves past the rotation interval here
                    barrier.wait();
                    barrier.wait();
                    for _ in 0..LINES {
                        write_str(&file, &format!("{}\n", generate_random_string()));
                    }
                })
            })
            .collect::<Vec<_>>();

        barrier.wait();
        clock.set_now(start.checked_add(Span::new().minutes(5)).unwrap());
        barrier.wait();
        for handle in handles {
            handle.join().unwrap();
        }

        let second_path = file.current_path();
        assert_ne!(second_path, first_path);
        assert_eq!(fs::read_dir(first_path.parent().unwrap()).unwrap().count(), 2);

        for path in [&first_path, &second_path] {
            let content = fs::read_to_string(path).unwrap();
            assert!(content.starts_with(HEADER));
            assert_eq!(content.matches(HEADER).count(), 1);

            let lines = content[HEADER.len()..].lines().collect::<Vec<_>>();
            assert_eq!(lines.len(), THREADS * LINES);
            assert!(lines.iter().all(|line| {
                (50..=100).contains(&line.len()) && line.chars().all(|c| c.is_ascii_alphanumeric())
            }));
        }
    }

    fn generate_random_string() -> String {
        let mut rng = rand::rng();
        let len = rng.random_range(50..=100);
        let random_string: String = std::iter::repeat(())
            .map(|()| rng.sample(Alphanumeric))
            .map(char::from)
            .take(len)
            .collect();

        random_string
    }
}
