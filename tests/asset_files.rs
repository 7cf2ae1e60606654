//! The shipped assets must be present and loadable.

use chess_board::assets::AssetPaths;
use chess_board::config::AssetConfig;
use chess_board::renderer::texture::decode_rgba;
use chess_board::{Kind, Team};
use std::path::PathBuf;

fn paths() -> AssetPaths {
    AssetPaths::new(&AssetConfig {
        root: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("assets"),
        ..AssetConfig::default()
    })
}

#[test]
fn all_piece_textures_are_png() {
    let paths = paths();
    for team in [Team::White, Team::Black] {
        for kind in Kind::ALL {
            let path = paths.piece_texture(team, kind);
            let bytes = std::fs::read(&path).unwrap_or_else(|e| panic!("{}: {e}", path.display()));
            assert_eq!(&bytes[0..4], b"\x89PNG", "{team} {kind} is not a valid PNG");

            let img = decode_rgba(&path).unwrap();
            assert!(img.width() > 0 && img.height() > 0);
        }
    }
}

#[test]
fn board_texture_is_square() {
    let img = decode_rgba(&paths().board_texture()).unwrap();
    assert_eq!(img.width(), img.height());
}

#[test]
fn shaders_define_their_entry_points() {
    let paths = paths();
    let vertex = std::fs::read_to_string(paths.vertex_shader()).unwrap();
    let fragment = std::fs::read_to_string(paths.fragment_shader()).unwrap();

    assert!(vertex.contains("@vertex"));
    assert!(vertex.contains(chess_board::renderer::shader::VERTEX_ENTRY));
    assert!(fragment.contains("@fragment"));
    assert!(fragment.contains(chess_board::renderer::shader::FRAGMENT_ENTRY));
}
