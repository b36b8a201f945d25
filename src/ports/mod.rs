mod directory_lister;
mod document_codec;

pub use directory_lister::DirectoryLister;
pub use document_codec::DocumentCodec;
