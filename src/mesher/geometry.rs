//! Mesh geometry types.

/// One corner of a triangular face: a 1-based vertex index and a 1-based
/// texcoord index, as used by OBJ `f` lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCorner {
    pub vertex: u32,
    pub texcoord: u32,
}

impl FaceCorner {
    pub fn new(vertex: u32, texcoord: u32) -> Self {
        Self { vertex, texcoord }
    }
}

/// A triangle referencing vertices and texcoords.
pub type Face = [FaceCorner; 3];

/// A triangle mesh with OBJ-style indexing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions, in emission order.
    pub vertices: Vec<[f64; 3]>,
    /// Triangular faces, in emission order.
    pub faces: Vec<Face>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a vertex and return its 1-based index.
    pub fn add_vertex(&mut self, position: [f64; 3]) -> u32 {
        self.vertices.push(position);
        self.vertices.len() as u32
    }

    /// Add a triangle.
    pub fn add_triangle(&mut self, a: FaceCorner, b: FaceCorner, c: FaceCorner) {
        self.faces.push([a, b, c]);
    }

    /// Add a quad as two clockwise triangles.
    ///
    /// `last_vertex` is the 1-based index of the quad's fourth vertex, so
    /// the quad spans `last_vertex - 3..=last_vertex`. `texcoord_base` is
    /// the 1-based index of its first texcoord.
    pub fn add_quad(&mut self, last_vertex: u32, texcoord_base: u32) {
        let v = last_vertex;
        let t = texcoord_base;
        self.add_triangle(
            FaceCorner::new(v - 3, t),
            FaceCorner::new(v - 2, t + 1),
            FaceCorner::new(v - 1, t + 2),
        );
        self.add_triangle(
            FaceCorner::new(v - 3, t),
            FaceCorner::new(v - 1, t + 2),
            FaceCorner::new(v, t + 3),
        );
    }

    /// Get the number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.faces.len()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Check if the mesh is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Translate all vertices by an offset.
    pub fn translate(&mut self, offset: [f64; 3]) {
        for vertex in &mut self.vertices {
            vertex[0] += offset[0];
            vertex[1] += offset[1];
            vertex[2] += offset[2];
        }
    }
}
