use bytemuck::{Pod, Zeroable};

/// Interleaved cube vertex: position, normal, texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Indexed triangle mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub indices: Vec<u16>,
}

impl Mesh {
    pub fn index_count(&self) -> u32 {
        self.indices.len() as u32
    }

    /// Unit cube centered at the origin, four vertices per face so each face
    /// gets its own normal and a full 0..1 texture mapping.
    ///
    /// Faces wind counter-clockwise seen from outside.
    pub fn cube() -> Self {
        let p = 0.5_f32;
        #[rustfmt::skip]
        let faces: [([f32; 3], [[f32; 3]; 4]); 6] = [
            // +Z
            ([0.0, 0.0, 1.0], [[-p, -p,  p], [ p, -p,  p], [ p,  p,  p], [-p,  p,  p]]),
            // -Z
            ([0.0, 0.0, -1.0], [[ p, -p, -p], [-p, -p, -p], [-p,  p, -p], [ p,  p, -p]]),
            // +X
            ([1.0, 0.0, 0.0], [[ p, -p,  p], [ p, -p, -p], [ p,  p, -p], [ p,  p,  p]]),
            // -X
            ([-1.0, 0.0, 0.0], [[-p, -p, -p], [-p, -p,  p], [-p,  p,  p], [-p,  p, -p]]),
            // +Y
            ([0.0, 1.0, 0.0], [[-p,  p,  p], [ p,  p,  p], [ p,  p, -p], [-p,  p, -p]]),
            // -Y
            ([0.0, -1.0, 0.0], [[-p, -p, -p], [ p, -p, -p], [ p, -p,  p], [-p, -p,  p]]),
        ];
        // bottom-left, bottom-right, top-right, top-left; texture v grows downward
        const UVS: [[f32; 2]; 4] = [[0.0, 1.0], [1.0, 1.0], [1.0, 0.0], [0.0, 0.0]];

        let mut vertices = Vec::with_capacity(24);
        let mut indices = Vec::with_capacity(36);
        for (normal, corners) in faces {
            let base = vertices.len() as u16;
            for (position, uv) in corners.into_iter().zip(UVS) {
                vertices.push(Vertex {
                    position,
                    normal,
                    uv,
                });
            }
            indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 3, base]);
        }

        Self { vertices, indices }
    }
}
