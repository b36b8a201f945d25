use crate::ports::{DirectoryLister, DocumentCodec};

/// Application context holding the I/O collaborators for command execution.
pub struct AppContext<L: DirectoryLister, C: DocumentCodec> {
    lister: L,
    codec: C,
}

impl<L: DirectoryLister, C: DocumentCodec> AppContext<L, C> {
    /// Create a new application context.
    pub fn new(lister: L, codec: C) -> Self {
        Self { lister, codec }
    }

    /// Get a reference to the directory lister.
    pub fn lister(&self) -> &L {
        &self.lister
    }

    /// Get a reference to the document codec.
    pub fn codec(&self) -> &C {
        &self.codec
    }
}
