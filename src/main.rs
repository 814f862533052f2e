use std::mem;
use std::path::Path;

use anyhow::Result;
use log::info;

use rtdemo::{models, scene, texture, Config, Vertex};

/// Builds the configured scene or model and reports the buffer sizes the
/// renderer would upload. Handy for checking assets and configs without
/// spinning up a GPU.
fn main() -> Result<()> {
    env_logger::init();

    let config = Config::from_env()?;
    info!("resolution {}x{}", config.width, config.height);

    let (model, material) = match &config.model {
        Some(path) => models::load_obj(path)?,
        None => scene::generate(config.scene),
    };

    info!(
        "material {:?}, vertex buffer {} bytes, index buffer {} bytes",
        material.name,
        model.vertices.len() * mem::size_of::<Vertex>(),
        model.indices.len() * mem::size_of::<u32>(),
    );

    if !material.texture_path.is_empty() {
        let info = texture::load_texture(Path::new(&material.texture_path))?;
        info!(
            "texture {}x{}, stride {}, {} bytes",
            info.width,
            info.height,
            info.stride,
            info.pixels.len()
        );
    }

    Ok(())
}
