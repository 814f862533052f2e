use std::collections::HashMap;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::structs::{Material, Model, Vertex, VertexKey};

/// Material description applied to every vertex loaded from an OBJ file.
const OBJ_MATERIAL: [f32; 3] = [1.0, 1.0, 0.0];
/// Fallback normal for faces that do not reference one.
const DEFAULT_NORMAL: [f32; 3] = [0.0, 0.0, 1.0];

/// Loads a triangle mesh from an OBJ file into an indexed `Model`.
///
/// Face vertices are hash-consed: every distinct vertex is stored once and
/// the index buffer references it, so meshes with shared corners come out
/// much smaller than the raw face list.
///
/// Position and normal axes are stored in reverse order (z, y, x) to match
/// the scene's coordinate convention, and the texture coordinate rides in
/// the vertex color with a marker of 2.0 in the red channel and a flipped
/// u in green.
pub fn load_obj(path: &Path) -> Result<(Model, Material)> {
    let load_options = tobj::LoadOptions {
        triangulate: true,
        ..Default::default()
    };
    let (meshes, materials) = tobj::load_obj(path, &load_options)
        .with_context(|| format!("could not load OBJ file {}", path.display()))?;

    // Only a single material is supported right now.
    let material = match materials {
        Ok(materials) if !materials.is_empty() => Material {
            name: materials[0].name.clone(),
            texture_path: materials[0].diffuse_texture.clone(),
            ..Material::default()
        },
        _ => Material::default(),
    };

    let mut model = Model::default();
    let mut unique_vertices: HashMap<VertexKey, u32> = HashMap::new();

    for mesh in meshes.iter().map(|m| &m.mesh) {
        for (slot, &index) in mesh.indices.iter().enumerate() {
            let p = index as usize * 3;
            let position = [
                mesh.positions[p + 2],
                mesh.positions[p + 1],
                mesh.positions[p],
            ];

            let color = match mesh.texcoord_indices.get(slot) {
                Some(&t) => {
                    let t = t as usize * 2;
                    [2.0, 1.0 - mesh.texcoords[t], mesh.texcoords[t + 1]]
                }
                None => [2.0, 1.0, 0.0],
            };

            let normal = match mesh.normal_indices.get(slot) {
                Some(&n) => {
                    let n = n as usize * 3;
                    [mesh.normals[n + 2], mesh.normals[n + 1], mesh.normals[n]]
                }
                None => DEFAULT_NORMAL,
            };

            let vertex = Vertex::new(position, color, normal, OBJ_MATERIAL);
            let next_index = model.vertices.len() as u32;
            let index = *unique_vertices.entry(vertex.key()).or_insert_with(|| {
                model.vertices.push(vertex);
                next_index
            });
            model.indices.push(index);
        }
    }

    info!(
        "loaded {}: {} unique vertices, {} triangles",
        path.display(),
        model.vertices.len(),
        model.triangle_count()
    );
    Ok((model, material))
}

/// Reads a whole file into memory.
pub fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("could not read file {}", path.display()))
}
