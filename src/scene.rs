//! Draw command lists that can be loaded from JSON and replayed onto a buffer

use log::warn;
use serde::{Deserialize, Serialize};

use crate::raster::Rasterizer;
use crate::surface::PixBuf;
use crate::{RasterConfig, Result, Vertex};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    Clear {
        color: u8,
    },
    Triangle {
        color: u8,
        vertices: [Vertex; 3],
    },
}

/// A canvas size, a rasterizer configuration and the commands to replay.
///
/// ```
/// let scene = trifill::Scene::from_json(r#"{
///     "width": 4, "height": 4,
///     "commands": [
///         {"op": "triangle", "color": 3,
///          "vertices": [{"x": 0, "y": 0}, {"x": 4, "y": 0}, {"x": 0, "y": 4}]}
///     ]
/// }"#).unwrap();
/// let buf = scene.render().unwrap();
/// assert_eq!(buf.get(0, 0), Some(3));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub width: usize,
    pub height: usize,
    #[serde(default)]
    pub config: RasterConfig,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: usize, height: usize, config: RasterConfig) -> Self {
        Self {
            width,
            height,
            config,
            commands: Vec::new(),
        }
    }

    pub fn from_json(s: &str) -> Result<Self> {
        let scene: Scene = serde_json::from_str(s)?;
        scene.config.validate()?;
        Ok(scene)
    }

    pub fn from_path(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    /// Replay every command onto a fresh zeroed buffer. Stops at the first
    /// triangle whose vertices fail validation.
    pub fn render(&self) -> Result<PixBuf> {
        let mut buf = PixBuf::new(self.width, self.height)?;
        let rasterizer = Rasterizer::new(self.config.clone());

        for (index, command) in self.commands.iter().enumerate() {
            match command {
                DrawCommand::Clear { color } => buf.clear(*color),
                DrawCommand::Triangle { color, vertices } => {
                    buf.set_fg_color(*color);
                    let [v1, v2, v3] = *vertices;
                    if let Err(e) = rasterizer.try_draw_triangle(&mut buf, v1, v2, v3) {
                        warn!("scene command {} rejected: {}", index, e);
                        return Err(e);
                    }
                }
            }
        }

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FillRule};

    #[test]
    fn commands_deserialize_with_op_tag() {
        let cmd: DrawCommand = serde_json::from_str(r#"{"op": "clear", "color": 4}"#).unwrap();
        assert_eq!(cmd, DrawCommand::Clear { color: 4 });

        let cmd: DrawCommand = serde_json::from_str(
            r#"{"op": "triangle", "color": 1, "vertices": [{"x": 1, "y": 2}, {"x": 3, "y": 4}, {"x": 5.5, "y": 6}]}"#,
        )
        .unwrap();
        match cmd {
            DrawCommand::Triangle { color, vertices } => {
                assert_eq!(color, 1);
                assert_eq!(vertices[2], Vertex::new(5.5, 6.0));
            }
            _ => panic!("unexpected"),
        }
    }

    #[test]
    fn render_replays_in_order() {
        let mut scene = Scene::new(6, 6, RasterConfig::default());
        scene.push(DrawCommand::Clear { color: 2 });
        scene.push(DrawCommand::Triangle {
            color: 7,
            vertices: [Vertex::new(0.0, 0.0), Vertex::new(6.0, 0.0), Vertex::new(0.0, 6.0)],
        });

        let buf = scene.render().unwrap();
        assert_eq!(buf.get(0, 0), Some(7));
        assert_eq!(buf.get(5, 5), Some(2));
        assert_eq!(buf.count(0), 0);
    }

    #[test]
    fn render_stops_on_invalid_vertex() {
        let mut scene = Scene::new(4, 4, RasterConfig::default());
        scene.push(DrawCommand::Triangle {
            color: 1,
            vertices: [Vertex::new(0.0, 0.0), Vertex::new(1.0e6, 0.0), Vertex::new(0.0, 1.0)],
        });
        assert!(matches!(scene.render(), Err(Error::VertexOutOfRange(_))));
    }

    #[test]
    fn config_defaults_when_missing() {
        let scene = Scene::from_json(r#"{"width": 2, "height": 2, "commands": []}"#).unwrap();
        assert_eq!(scene.config.fill_rule, FillRule::Reference);

        let scene = Scene::from_json(
            r#"{"width": 2, "height": 2, "config": {"fill_rule": "top-left"}, "commands": []}"#,
        )
        .unwrap();
        assert_eq!(scene.config.fill_rule, FillRule::TopLeft);
    }
}
