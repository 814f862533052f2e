use std::f32::consts::PI;

use log::info;

use crate::config::SceneKind;
use crate::structs::{Material, Model, Vertex};

/// Latitude ring count for generated spheres. Longitude uses twice as many
/// segments so the quads stay roughly square.
const VERTICAL_SEGMENTS: usize = 20;

/// Generates one of the hard-coded demo scenes.
pub fn generate(kind: SceneKind) -> (Model, Material) {
    let scene = match kind {
        SceneKind::Simple => simple_scene(),
        SceneKind::Bunny => bunny_scene(),
    };
    info!(
        "generated {:?} scene: {} vertices, {} triangles",
        kind,
        scene.0.vertices.len(),
        scene.0.triangle_count()
    );
    scene
}

fn push_vertices(
    model: &mut Model,
    positions: &[[f32; 3]],
    color: [f32; 3],
    normal: [f32; 3],
    material: [f32; 3],
) {
    for &position in positions {
        model.vertices.push(Vertex::new(position, color, normal, material));
    }
}

/// Appends a UV sphere to the model: rings of vertices from the south pole
/// to the north pole, quads joining each pair of latitude rings. `scale` is
/// the sphere's diameter.
pub fn push_sphere(
    model: &mut Model,
    center: [f32; 3],
    scale: f32,
    color: [f32; 3],
    material: [f32; 3],
) {
    let radius = scale / 2.0;
    let horizontal_segments = VERTICAL_SEGMENTS * 2;
    let index_offset = model.vertices.len() as u32;

    for i in 0..=VERTICAL_SEGMENTS {
        let latitude = i as f32 * PI / VERTICAL_SEGMENTS as f32 - PI / 2.0;
        let (dy, dxz) = latitude.sin_cos();

        for j in 0..=horizontal_segments {
            let longitude = j as f32 * 2.0 * PI / horizontal_segments as f32;
            let (mut dx, mut dz) = longitude.sin_cos();
            dx *= dxz;
            dz *= dxz;

            let normal = [dx, dy, dz];
            model.vertices.push(Vertex::new(
                [
                    dx * radius + center[0],
                    dy * radius + center[1],
                    dz * radius + center[2],
                ],
                color,
                normal,
                material,
            ));
        }
    }

    // Each ring repeats its first vertex as a seam column, so the quad loop
    // runs over the seam too.
    let stride = (horizontal_segments + 1) as u32;
    for i in 0..VERTICAL_SEGMENTS as u32 {
        for j in 0..stride {
            let next_i = i + 1;
            let next_j = (j + 1) % stride;

            model.indices.push(index_offset + i * stride + j);
            model.indices.push(index_offset + next_i * stride + j);
            model.indices.push(index_offset + i * stride + next_j);

            model.indices.push(index_offset + i * stride + next_j);
            model.indices.push(index_offset + next_i * stride + j);
            model.indices.push(index_offset + next_i * stride + next_j);
        }
    }
}

/// A back wall, a strip of floor, one side triangle and three spheres.
pub fn simple_scene() -> (Model, Material) {
    let mut model = Model::default();

    // Back
    push_vertices(
        &mut model,
        &[
            [-8.0, -2.0, -20.0],
            [8.0, -2.0, -20.0],
            [8.0, 10.0, -20.0],
            [-8.0, 10.0, -20.0],
        ],
        [0.0, 0.0, 1.0],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
    );

    // Floor
    push_vertices(
        &mut model,
        &[
            [-8.0, -2.0, -20.0],
            [8.0, -2.0, -20.0],
            [8.0, -2.0, -10.0],
            [-8.0, -2.0, -10.0],
        ],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 0.0, 0.0],
    );

    // Side
    push_vertices(
        &mut model,
        &[
            [-8.0, -2.0, -20.0],
            [-8.0, -2.0, -10.0],
            [-8.0, 10.0, -20.0],
        ],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
    );

    model.indices.extend_from_slice(&[
        // Back
        0, 1, 2, //
        0, 2, 3, //
        // Floor
        4, 6, 5, //
        4, 7, 6, //
        // Side
        8, 10, 9,
    ]);

    push_sphere(&mut model, [0.0, 0.0, -16.0], 4.0, [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]);
    push_sphere(&mut model, [-3.0, -1.0, -14.0], 2.0, [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]);
    push_sphere(&mut model, [3.0, -1.0, -14.0], 2.0, [1.0, 0.0, 0.0], [1.0, 0.0, 0.0]);

    (model, Material::default())
}

/// The full environment box with a bunny assembled from triangles and
/// spheres, two laser swords included.
pub fn bunny_scene() -> (Model, Material) {
    let mut model = Model::default();

    // Back
    push_vertices(
        &mut model,
        &[
            [-8.0, -2.0, -20.0],
            [8.0, -2.0, -20.0],
            [8.0, 10.0, -20.0],
            [-8.0, 10.0, -20.0],
        ],
        [0.61, 0.0, 0.0],
        [0.0, 0.0, 1.0],
        [1.0, 1.0, 0.0],
    );

    // Floor
    push_vertices(
        &mut model,
        &[
            [-8.0, -2.0, -20.0],
            [8.0, -2.0, -20.0],
            [8.0, -2.0, 0.0],
            [-8.0, -2.0, 0.0],
        ],
        [1.0, 1.0, 1.0],
        [0.0, 1.0, 0.0],
        [1.0, 1.0, 0.5],
    );

    // Right side
    push_vertices(
        &mut model,
        &[
            [-8.0, -2.0, -20.0],
            [-8.0, -2.0, 0.0],
            [-8.0, 10.0, -20.0],
            [-8.0, 10.0, 0.0],
        ],
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.5, 0.5, 0.5],
    );

    // Left side
    push_vertices(
        &mut model,
        &[
            [8.0, -2.0, -20.0],
            [8.0, -2.0, 0.0],
            [8.0, 10.0, -20.0],
            [8.0, 10.0, 0.0],
        ],
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [0.5, 0.5, 0.5],
    );

    // Ears
    push_vertices(
        &mut model,
        &[
            [1.3, 5.0, -12.0],
            [0.3, 3.75, -14.0],
            [0.8, 3.0, -14.0],
        ],
        [0.36, 0.25, 0.05],
        [-1.5, -1.0, 1.31],
        [1.0, 0.0, 0.0],
    );
    push_vertices(
        &mut model,
        &[
            [-0.3, 3.75, -14.0],
            [-1.3, 5.0, -12.0],
            [-0.8, 3.0, -14.0],
        ],
        [0.36, 0.25, 0.05],
        [1.5, -1.0, 1.31],
        [1.0, 0.0, 0.0],
    );

    // Inner ears
    push_vertices(
        &mut model,
        &[
            [1.07, 4.51, -12.59],
            [0.4, 3.60, -13.99],
            [0.7, 3.15, -13.99],
        ],
        [0.99, 0.62, 0.87],
        [-1.5, -1.0, 1.31],
        [1.0, 0.0, 0.0],
    );
    push_vertices(
        &mut model,
        &[
            [-0.4, 3.60, -13.99],
            [-1.07, 4.51, -12.59],
            [-0.7, 3.15, -13.99],
        ],
        [0.99, 0.62, 0.87],
        [1.5, -1.0, 1.31],
        [1.0, 0.0, 0.0],
    );

    // Nose
    push_vertices(
        &mut model,
        &[
            [0.25, 2.0, -12.24],
            [-0.25, 2.0, -12.24],
            [0.0, 1.56699, -12.24],
        ],
        [0.80, 0.69, 0.48],
        [0.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
    );

    // Arms
    push_vertices(
        &mut model,
        &[
            [1.5, 1.0, -14.0],
            [1.5, 0.0, -14.0],
            [2.5, 1.25, -10.0],
            [2.5, 1.0, -10.0],
            [2.5, 1.25, -10.0],
            [1.5, 0.0, -14.0],
        ],
        [0.36, 0.25, 0.05],
        [-4.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
    );
    push_vertices(
        &mut model,
        &[
            [-1.5, 0.0, -14.0],
            [-1.5, 1.0, -14.0],
            [-2.5, 1.25, -10.0],
            [-2.5, 1.25, -10.0],
            [-2.5, 1.0, -10.0],
            [-1.5, 0.0, -14.0],
        ],
        [0.36, 0.25, 0.05],
        [4.0, 0.0, 1.0],
        [1.0, 0.0, 0.0],
    );

    // Laser swords: handles first, then the blades.
    push_vertices(
        &mut model,
        &[
            [2.375, 1.75, -10.0],
            [2.375, 0.5, -10.0],
            [2.625, 1.75, -10.0],
            [2.625, 1.75, -10.0],
            [2.375, 0.5, -10.0],
            [2.625, 0.5, -10.0],
        ],
        [0.78, 0.78, 0.78],
        [0.0, 0.0, 1.0],
        [0.5, 0.5, 1.0],
    );
    push_vertices(
        &mut model,
        &[
            [2.375, 6.0, -10.0],
            [2.375, 1.75, -10.0],
            [2.625, 6.0, -10.0],
            [2.625, 6.0, -10.0],
            [2.375, 1.75, -10.0],
            [2.625, 1.75, -10.0],
        ],
        [0.05, 0.87, 0.95],
        [0.0, 0.0, 1.0],
        [1.0, 1.5, 0.3],
    );
    push_vertices(
        &mut model,
        &[
            [-2.375, 1.75, -10.0],
            [-2.375, 0.5, -10.0],
            [-2.625, 1.75, -10.0],
            [-2.625, 1.75, -10.0],
            [-2.375, 0.5, -10.0],
            [-2.625, 0.5, -10.0],
        ],
        [0.78, 0.78, 0.78],
        [0.0, 0.0, 1.0],
        [0.5, 0.5, 1.0],
    );
    push_vertices(
        &mut model,
        &[
            [-2.375, 6.0, -10.0],
            [-2.375, 1.75, -10.0],
            [-2.625, 6.0, -10.0],
            [-2.625, 6.0, -10.0],
            [-2.375, 1.75, -10.0],
            [-2.625, 1.75, -10.0],
        ],
        [0.42, 0.02, 0.68],
        [0.0, 0.0, 1.0],
        [1.0, 1.5, 0.3],
    );

    model.indices.extend_from_slice(&[
        // Back
        0, 1, 2, //
        0, 2, 3, //
        // Floor
        4, 6, 5, //
        4, 7, 6, //
        // Right side
        8, 10, 9, //
        10, 11, 9, //
        // Left side
        14, 12, 13, //
        15, 14, 13,
    ]);
    // The bunny's triangles are listed in vertex order.
    for triangle in (16..=64).step_by(3) {
        model
            .indices
            .extend_from_slice(&[triangle, triangle + 1, triangle + 2]);
    }

    // Ground spheres
    push_sphere(&mut model, [4.5, -2.0, -12.0], 2.0, [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]);
    push_sphere(&mut model, [-4.5, -2.0, -12.0], 2.0, [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]);
    push_sphere(&mut model, [4.5, -2.0, -4.0], 2.0, [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]);
    push_sphere(&mut model, [-4.5, -2.0, -4.0], 2.0, [1.0, 1.0, 1.0], [0.0, 0.0, 1.0]);

    // Bunny spheres: body, head, eyes, pupils, paws, feet.
    push_sphere(&mut model, [0.0, 0.0, -16.0], 6.0, [0.36, 0.25, 0.05], [1.0, 0.0, 0.0]);
    push_sphere(&mut model, [0.0, 2.0, -14.0], 3.5, [0.36, 0.25, 0.05], [1.0, 0.0, 0.0]);
    push_sphere(&mut model, [0.75, 3.0, -13.0], 1.0, [1.0, 1.0, 1.0], [1.0, 1.0, 0.5]);
    push_sphere(&mut model, [-0.75, 3.0, -13.0], 1.0, [1.0, 1.0, 1.0], [1.0, 1.0, 0.5]);
    push_sphere(&mut model, [0.75, 3.0, -12.6], 0.4, [0.0, 0.0, 0.0], [1.0, 1.0, 0.5]);
    push_sphere(&mut model, [-0.75, 3.0, -12.6], 0.4, [0.0, 0.0, 0.0], [1.0, 1.0, 0.5]);
    push_sphere(&mut model, [2.5, 1.125, -10.0], 0.6, [0.36, 0.25, 0.05], [1.0, 0.0, 0.0]);
    push_sphere(&mut model, [-2.5, 1.125, -10.0], 0.6, [0.36, 0.25, 0.05], [1.0, 0.0, 0.0]);
    push_sphere(&mut model, [2.0, -2.0, -14.25], 1.5, [0.36, 0.25, 0.05], [1.0, 0.0, 0.0]);
    push_sphere(&mut model, [-2.0, -2.0, -14.25], 1.5, [0.36, 0.25, 0.05], [1.0, 0.0, 0.0]);

    (model, Material::default())
}
