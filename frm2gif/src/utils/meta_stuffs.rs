use std::{fs::OpenOptions, io::Write, path::Path};

use frm::Atlas;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FrameMetadata {
    pub frame: usize,
    pub width: u16,
    pub height: u16,
    pub origin_x: i16,
    pub origin_y: i16,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectionMetadata {
    /// GIF this direction was written to, if any.
    pub file: Option<String>,
    pub shift_x: i16,
    pub shift_y: i16,
    pub frames: Vec<FrameMetadata>,
}

/// Sidecar describing what was decoded and where it went.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AtlasMetadata {
    pub source: String,
    pub layout: String,
    pub frame_rate: u16,
    pub delay_ms: u32,
    pub directions: Vec<DirectionMetadata>,
}

impl AtlasMetadata {
    /// `files[d]` is the output name of direction `d`.
    pub fn new(source: &str, atlas: &Atlas, delay_ms: u32, files: &[Option<String>]) -> Self {
        let directions = atlas
            .directions()
            .iter()
            .enumerate()
            .map(|(direction_index, direction)| DirectionMetadata {
                file: files.get(direction_index).cloned().flatten(),
                shift_x: direction.shift_x(),
                shift_y: direction.shift_y(),
                frames: direction
                    .iter()
                    .enumerate()
                    .map(|(frame_index, frame)| FrameMetadata {
                        frame: frame_index,
                        width: frame.width(),
                        height: frame.height(),
                        origin_x: frame.origin_x(),
                        origin_y: frame.origin_y(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            source: source.to_string(),
            layout: atlas.layout().to_string(),
            frame_rate: atlas.frame_rate(),
            delay_ms,
            directions,
        }
    }

    pub fn write(&self, path: impl AsRef<Path>) -> eyre::Result<()> {
        let text = serde_json::to_string_pretty(self)?;

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path.as_ref())?;

        file.write_all(text.as_bytes())?;
        file.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn describe_atlas() {
        let atlas =
            Atlas::open_from_bytes(include_bytes!("../../../frm/test/table_b.frm")).unwrap();
        let files = vec![Some("table_b__dir0.gif".to_string())];

        let metadata = AtlasMetadata::new("table_b.frm", &atlas, 125, &files);

        assert_eq!(metadata.layout, "B@0");
        assert_eq!(metadata.frame_rate, 8);
        assert_eq!(metadata.directions.len(), 2);
        assert_eq!(metadata.directions[0].file.as_deref(), Some("table_b__dir0.gif"));
        assert_eq!(metadata.directions[1].file, None);
        assert_eq!(
            metadata.directions[1].frames[1],
            FrameMetadata {
                frame: 1,
                width: 2,
                height: 3,
                origin_x: 10,
                origin_y: 1,
            }
        );
    }

    #[test]
    fn write_json() {
        let atlas =
            Atlas::open_from_bytes(include_bytes!("../../../frm/test/versioned.frm")).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("versioned.json");

        let metadata = AtlasMetadata::new("versioned.frm", &atlas, 100, &[]);
        metadata.write(&path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let read: AtlasMetadata = serde_json::from_str(&text).unwrap();

        assert_eq!(read, metadata);
        assert_eq!(read.layout, "A@4");
    }
}
