//! 迷宫定义文件的读写支持：JSON 与 RON.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid::structure::{Maze, MazeError};

#[derive(Debug, Error)]
pub enum IoError {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("ron error: {0}")]
    Ron(#[from] ron::Error),
    #[error("ron error: {0}")]
    RonParse(#[from] ron::error::SpannedError),
    #[error("unsupported definition format {0:?}, expected .json or .ron")]
    UnknownFormat(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw, not-yet-validated maze definition as it appears on disk.
///
/// Field names mirror the payload of the original service (`gridSize`,
/// `entrance`, `walls`), so its stored records load unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MazeDefinition {
    pub grid_size: String,
    pub entrance: String,
    pub walls: Vec<String>,
}

impl MazeDefinition {
    /// Validates the raw definition into a [`Maze`].
    pub fn into_maze(&self) -> Result<Maze, MazeError> {
        Maze::parse(&self.grid_size, &self.walls, &self.entrance)
    }
}

pub fn from_json_str(content: &str) -> Result<MazeDefinition, IoError> {
    Ok(serde_json::from_str(content)?)
}

pub fn from_ron_str(content: &str) -> Result<MazeDefinition, IoError> {
    Ok(ron::from_str(content)?)
}

/// Reads a definition file, picking the format from the file extension.
pub fn read_definition<P: AsRef<Path>>(path: P) -> Result<MazeDefinition, IoError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => from_json_str(&content),
        Some("ron") => from_ron_str(&content),
        other => Err(IoError::UnknownFormat(
            other.unwrap_or_default().to_owned(),
        )),
    }
}

/// Writes any serializable value as pretty-printed JSON.
pub fn write_json<P: AsRef<Path>, T: Serialize>(path: P, value: &T) -> Result<(), IoError> {
    let content = serde_json::to_string_pretty(value)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_definitions_use_the_original_field_names() {
        let definition = from_json_str(
            r#"{"gridSize": "8x8", "entrance": "A1", "walls": ["A2", "A3"]}"#,
        )
        .unwrap();
        assert_eq!(definition.grid_size, "8x8");
        assert_eq!(definition.entrance, "A1");
        assert_eq!(definition.walls, vec!["A2", "A3"]);
    }

    #[test]
    fn ron_definitions_parse() {
        let definition = from_ron_str(
            r#"(gridSize: "4x4", entrance: "A1", walls: ["B1", "B2"])"#,
        )
        .unwrap();
        assert_eq!(definition.grid_size, "4x4");
        assert_eq!(definition.walls.len(), 2);
    }

    #[test]
    fn definitions_validate_into_mazes() {
        let definition = MazeDefinition {
            grid_size: "8x8".to_owned(),
            entrance: "A1".to_owned(),
            walls: vec!["A2".to_owned()],
        };
        let maze = definition.into_maze().unwrap();
        assert_eq!(maze.size().rows, 8);

        let bad = MazeDefinition {
            grid_size: "8xs".to_owned(),
            ..definition
        };
        assert_eq!(
            bad.into_maze().unwrap_err(),
            MazeError::InvalidGridSize("8xs".to_owned())
        );
    }
}
