use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use connectx::GameRecord;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Writes numbered game recordings into a directory.
pub struct Recorder {
    num: usize,
    directory: PathBuf,
}

impl Recorder {
    pub fn new(directory: PathBuf) -> anyhow::Result<Self> {
        if !directory.is_dir() {
            anyhow::bail!("Directory '{}' does not exist", directory.display());
        }
        Ok(Self { num: 1, directory })
    }

    /// Stores `record` as `game_<num>.json` and returns its path.
    pub fn write_game_recording(&mut self, record: &GameRecord) -> anyhow::Result<PathBuf> {
        let filepath = self.directory.join(format!("game_{:0>6}.json", self.num));
        let mut writer = BufWriter::new(File::create(&filepath)?);
        serde_json::to_writer_pretty(&mut writer, record)?;
        writeln!(writer)?;
        writer.flush()?;
        debug!(path = %filepath.display(), "Wrote game recording");
        self.num += 1;
        Ok(filepath)
    }
}

fn load_json<T: DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = File::open(path).with_context(|| format!("Could not open '{}'", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("Could not parse '{}'", path.display()))
}

pub fn load_game_record(path: &Path) -> anyhow::Result<GameRecord> {
    load_json(path)
}

#[cfg(test)]
mod tests {
    use connectx::{token, BoardDimensions, Move};

    use super::*;

    #[test]
    fn write_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut recorder = Recorder::new(dir.path().to_path_buf()).unwrap();
        let mut record = GameRecord::new(BoardDimensions::new(6, 7, 4).unwrap());
        record.moves.push(Move {
            token: token!('X'),
            column: 2,
        });

        let first = recorder.write_game_recording(&record).unwrap();
        let second = recorder.write_game_recording(&record).unwrap();
        assert_eq!(first, dir.path().join("game_000001.json"));
        assert_eq!(second, dir.path().join("game_000002.json"));
        assert_eq!(load_game_record(&first).unwrap(), record);
    }

    #[test]
    fn missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Recorder::new(dir.path().join("does_not_exist")).is_err());
    }

    #[test]
    fn invalid_record_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(
            &path,
            r#"{"dimensions": {"rows": 3, "columns": 7, "num_to_win": 4}, "moves": []}"#,
        )
        .unwrap();
        let err = load_game_record(&path).unwrap_err();
        assert!(err.to_string().contains("Could not parse"));
        assert!(load_game_record(&dir.path().join("missing.json")).is_err());
    }
}
