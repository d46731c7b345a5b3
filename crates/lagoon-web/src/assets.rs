//! Asynchronous wall model loading.
//!
//! Fetch and decode run off the critical path; failures are logged here and
//! leave the wall pending. The scene's state machine never sees them.

use lagoon_core::{SceneState, WallMesh, WALL_POSITION};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

const WALL_ASSET_URL: &str = "assets/wall.glb";

pub fn spawn_wall_fetch(scene: Rc<RefCell<SceneState>>) {
    spawn_local(async move {
        match fetch_wall().await {
            Ok(mesh) => {
                log::info!("[assets] wall model ready ({} vertices)", mesh.positions.len());
                scene.borrow_mut().wall_loaded(mesh);
            }
            Err(e) => log::warn!("[assets] wall model unavailable: {e:?}"),
        }
    });
}

async fn fetch_wall() -> anyhow::Result<WallMesh> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_str(WALL_ASSET_URL))
        .await
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    if !resp.ok() {
        return Err(anyhow::anyhow!("fetch failed: HTTP {}", resp.status()));
    }
    let buf = JsFuture::from(resp.array_buffer().map_err(|e| anyhow::anyhow!("{e:?}"))?)
        .await
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let bytes = js_sys::Uint8Array::new(&buf).to_vec();
    decode_wall(&bytes)
}

/// Decode every triangle primitive of the first mesh in the asset, placed
/// at the wall's world position.
fn decode_wall(bytes: &[u8]) -> anyhow::Result<WallMesh> {
    let (document, buffers, _images) = gltf::import_slice(bytes)?;
    let mesh = document
        .meshes()
        .next()
        .ok_or_else(|| anyhow::anyhow!("no mesh in wall asset"))?;

    let mut out = WallMesh::default();
    for primitive in mesh.primitives() {
        if primitive.mode() != gltf::mesh::Mode::Triangles {
            continue;
        }
        let reader = primitive.reader(|buffer| Some(&buffers[buffer.index()]));

        let base = out.positions.len() as u32;
        let positions = reader
            .read_positions()
            .ok_or_else(|| anyhow::anyhow!("wall primitive has no positions"))?;
        out.positions.extend(positions.map(|p| {
            [
                p[0] + WALL_POSITION[0],
                p[1] + WALL_POSITION[1],
                p[2] + WALL_POSITION[2],
            ]
        }));
        match reader.read_normals() {
            Some(normals) => out.normals.extend(normals),
            None => out.normals.resize(out.positions.len(), [0.0, 1.0, 0.0]),
        }
        let indices = reader
            .read_indices()
            .ok_or_else(|| anyhow::anyhow!("wall primitive has no indices"))?;
        out.indices.extend(indices.into_u32().map(|i| base + i));
    }

    if out.positions.is_empty() {
        return Err(anyhow::anyhow!("wall asset has no triangle primitives"));
    }
    Ok(out)
}
