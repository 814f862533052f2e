use std::hash::{Hash, Hasher};

//-----------Vertex-----------------

/// A single raytracing vertex as it is uploaded to the GPU.
///
/// `color` doubles as the texture-coordinate carrier for textured meshes:
/// a red channel of 2.0 marks the vertex as textured and the green/blue
/// channels hold the flipped UV pair.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct Vertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
    pub normal: [f32; 3],
    pub material: [f32; 3],
}

impl Vertex {
    pub fn new(position: [f32; 3], color: [f32; 3], normal: [f32; 3], material: [f32; 3]) -> Self {
        Self {
            position,
            color,
            normal,
            material,
        }
    }

    pub fn key(&self) -> VertexKey {
        let mut bits = [0u32; 12];
        for (slot, value) in bits.iter_mut().zip(
            self.position
                .iter()
                .chain(self.color.iter())
                .chain(self.normal.iter())
                .chain(self.material.iter()),
        ) {
            *slot = value.to_bits();
        }
        VertexKey(bits)
    }
}

/// Hashable identity of a vertex, taken over the exact bit patterns of all
/// of its fields. Used to deduplicate vertices while building index buffers.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct VertexKey([u32; 12]);

impl Hash for VertexKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

//-----------Model-----------------

/// An indexed triangle mesh ready for buffer upload.
#[derive(Clone, Debug, Default)]
pub struct Model {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u32>,
}

impl Model {
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

//-----------Material-----------------

#[derive(Clone, Debug)]
pub struct Material {
    pub name: String,
    pub texture_path: String,
    pub texture_resolution: f32,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::from("defaultMaterial"),
            texture_path: String::new(),
            texture_resolution: 512.0,
        }
    }
}

//-----------Texture-----------------

/// Decoded image data in the RGBA layout the renderer uploads.
#[derive(Clone, Debug, Default)]
pub struct TextureInfo {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: u32,
}
