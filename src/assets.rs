//! Asset locations on disk.
//!
//! Everything the viewer loads lives under a single root directory:
//!
//! ```text
//! <root>/shaders/default.vert.wgsl
//! <root>/shaders/default.frag.wgsl
//! <root>/textures/board.png
//! <root>/textures/{white,black}_{pawn,rook,knight,bishop,queen,king}.png
//! ```

use crate::config::AssetConfig;
use crate::piece::{Kind, Team};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetPaths {
    root: PathBuf,
    board: String,
}

impl AssetPaths {
    pub fn new(config: &AssetConfig) -> Self {
        Self {
            root: config.root.clone(),
            board: config.board.clone(),
        }
    }

    pub fn vertex_shader(&self) -> PathBuf {
        self.root.join("shaders").join("default.vert.wgsl")
    }

    pub fn fragment_shader(&self) -> PathBuf {
        self.root.join("shaders").join("default.frag.wgsl")
    }

    pub fn board_texture(&self) -> PathBuf {
        self.root.join("textures").join(&self.board)
    }

    /// Sprite for a team/kind pair, e.g. `textures/black_knight.png`.
    pub fn piece_texture(&self, team: Team, kind: Kind) -> PathBuf {
        self.root
            .join("textures")
            .join(format!("{}_{}.png", team.asset_name(), kind.asset_name()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn paths() -> AssetPaths {
        AssetPaths::new(&AssetConfig::default())
    }

    #[test]
    fn shader_paths() {
        let paths = paths();
        assert_eq!(paths.vertex_shader(), Path::new("assets/shaders/default.vert.wgsl"));
        assert_eq!(paths.fragment_shader(), Path::new("assets/shaders/default.frag.wgsl"));
    }

    #[test]
    fn all_piece_textures_are_distinct() {
        let paths = paths();
        let mut seen = std::collections::HashSet::new();
        for team in [Team::White, Team::Black] {
            for kind in Kind::ALL {
                assert!(seen.insert(paths.piece_texture(team, kind)), "{team} {kind} duplicated");
            }
        }
        assert_eq!(seen.len(), 12);
        assert!(seen.contains(Path::new("assets/textures/white_pawn.png")));
        assert!(seen.contains(Path::new("assets/textures/black_king.png")));
    }

    #[test]
    fn board_texture_follows_config() {
        let config = AssetConfig {
            root: PathBuf::from("/opt/chess"),
            board: "walnut.jpg".to_string(),
        };
        assert_eq!(
            AssetPaths::new(&config).board_texture(),
            Path::new("/opt/chess/textures/walnut.jpg")
        );
    }
}
