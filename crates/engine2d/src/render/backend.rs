//! Backend abstraction traits for the rendering system
//!
//! Shader compilation and texture loading belong to the graphics backend.
//! This crate only needs the handles they produce, so both are expressed as
//! small traits the backend implements.

use std::path::{Path, PathBuf};

use crate::render::{RenderError, RenderResult};

/// Handle to a texture owned by the backend
///
/// Opaque to this crate: it is only stored and handed back with draw commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u64);

/// Handle to a linked shader program owned by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(pub u64);

/// Compiles shader programs from source
pub trait ShaderCompiler {
    /// Compile and link a program from vertex, geometry and fragment sources
    ///
    /// `geometry` may be empty, meaning the program has no geometry stage.
    fn compile_program(
        &mut self,
        vertex: &str,
        geometry: &str,
        fragment: &str,
    ) -> RenderResult<ShaderHandle>;
}

/// Loads textures from disk
pub trait TextureLoader {
    /// Load a texture from `path` and return its handle
    fn load_texture(&mut self, path: &Path) -> RenderResult<TextureHandle>;
}

/// Sources of a program accepted by [`HeadlessBackend`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramSource {
    /// Vertex stage source
    pub vertex: String,
    /// Geometry stage source, empty when absent
    pub geometry: String,
    /// Fragment stage source
    pub fragment: String,
}

/// Backend without a GPU
///
/// Hands out sequential handles and keeps what it was given, which is enough
/// for tools, tests and the demo to drive text layout and draw queues. It does
/// not touch the file system.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    programs: Vec<ProgramSource>,
    textures: Vec<PathBuf>,
}

impl HeadlessBackend {
    /// Create an empty backend
    pub fn new() -> Self {
        Self::default()
    }

    /// Sources registered for `handle`
    pub fn program(&self, handle: ShaderHandle) -> Option<&ProgramSource> {
        usize::try_from(handle.0).ok().and_then(|index| self.programs.get(index))
    }

    /// Path registered for `handle`
    pub fn texture_path(&self, handle: TextureHandle) -> Option<&Path> {
        usize::try_from(handle.0)
            .ok()
            .and_then(|index| self.textures.get(index))
            .map(PathBuf::as_path)
    }

    /// Number of programs compiled so far
    pub fn program_count(&self) -> usize {
        self.programs.len()
    }
}

impl ShaderCompiler for HeadlessBackend {
    fn compile_program(
        &mut self,
        vertex: &str,
        geometry: &str,
        fragment: &str,
    ) -> RenderResult<ShaderHandle> {
        if vertex.trim().is_empty() || fragment.trim().is_empty() {
            return Err(RenderError::ResourceCreationFailed(
                "shader program needs vertex and fragment stages".to_string(),
            ));
        }

        let handle = ShaderHandle(self.programs.len() as u64);
        self.programs.push(ProgramSource {
            vertex: vertex.to_string(),
            geometry: geometry.to_string(),
            fragment: fragment.to_string(),
        });

        log::debug!("Headless shader program registered: {:?}", handle);
        Ok(handle)
    }
}

impl TextureLoader for HeadlessBackend {
    fn load_texture(&mut self, path: &Path) -> RenderResult<TextureHandle> {
        let handle = TextureHandle(self.textures.len() as u64);
        self.textures.push(path.to_path_buf());

        log::debug!("Headless texture registered: {:?} -> {}", handle, path.display());
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_programs_get_sequential_handles() {
        let mut backend = HeadlessBackend::new();
        let first = backend.compile_program("void main() {}", "", "void main() {}").unwrap();
        let second = backend.compile_program("void main() {}", "", "void main() {}").unwrap();

        assert_eq!(first, ShaderHandle(0));
        assert_eq!(second, ShaderHandle(1));
        assert_eq!(backend.program_count(), 2);
        assert!(backend.program(second).unwrap().geometry.is_empty());
    }

    #[test]
    fn test_missing_stage_is_rejected() {
        let mut backend = HeadlessBackend::new();
        let result = backend.compile_program("", "", "void main() {}");
        assert!(matches!(result, Err(RenderError::ResourceCreationFailed(_))));
    }

    #[test]
    fn test_texture_paths_are_kept() {
        let mut backend = HeadlessBackend::new();
        let handle = backend.load_texture(Path::new("fonts/atlas.png")).unwrap();
        assert_eq!(backend.texture_path(handle), Some(Path::new("fonts/atlas.png")));
        assert_eq!(backend.texture_path(TextureHandle(7)), None);
    }
}
