/// Defines the byte-level reader and writer used by the binary codec.
pub mod bit_coder;

/// Defines the in-memory mesh structures.
pub mod mesh;

/// Contains the shared traits.
pub mod shared;
