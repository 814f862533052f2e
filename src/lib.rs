/*!
# rtdemo

Support code for a real-time raytracing demo: everything the renderer needs
prepared in memory before and between frames, with no GPU or windowing
dependency of its own.

## Modules

- `camera`: an orbit/fly camera driven by accumulated mouse deltas and
  discrete key state, plus the display toggles that share its keys.
- `config`: command-line (and optional TOML file) configuration.
- `models`: OBJ mesh loading with hash-consed vertex deduplication.
- `scene`: procedural generation of the hard-coded demo scenes.
- `structs`: the shared vertex, mesh, material and texture types.
- `texture`: image loading and RGB to RGBA reformatting.

## Usage

```no_run
use std::time::Duration;
use rtdemo::{Camera, CameraController, SceneKind};

// Generate a demo scene and its (default) material.
let (model, _material) = rtdemo::scene::generate(SceneKind::Bunny);
assert!(!model.vertices.is_empty());

// Drive the camera from input events each frame.
let mut camera = Camera::default();
let mut controller = CameraController::new();
controller.update_camera(&mut camera, Duration::from_millis(16));
```

Every operation is synchronous and single-threaded: scenes and meshes are
built once at startup, the camera is updated once per input-poll frame.
*/

pub mod camera;
pub mod config;
pub mod models;
pub mod scene;
pub mod structs;
pub mod texture;

pub use camera::{Camera, CameraController};
pub use config::{Config, SceneKind};
pub use models::{load_obj, read_file};
pub use scene::{bunny_scene, push_sphere, simple_scene};
pub use structs::{Material, Model, TextureInfo, Vertex};
pub use texture::{format_texture, load_texture};
