// lib.rs

/// Contains the interface between the in-memory mesh structures and the
/// on-disk formats: the `.node`/`.ele` text codecs and the binary mesh file
/// operations.
pub mod io;

/// Defines the binary mesh encoder.
pub mod encode;

/// Defines the binary mesh decoder.
pub mod decode;

/// Contains the shared definitions, native objects, and the byte codec.
pub mod core;

/// Contains the most commonly used traits, types, and objects.
pub mod prelude {
    pub use crate::core::bit_coder::{ByteReader, ByteWriter};
    pub use crate::core::mesh::{BinaryMesh, Ele, Node};
    pub use crate::core::shared::ConfigType;
    pub use crate::decode::{self, decode};
    pub use crate::encode::{self, encode, encode_raw};
    pub use crate::io::binary::{read_binary, write_node_ele_as_binary, write_to_binary};
    pub use crate::io::ele::{read_ele, write_ele};
    pub use crate::io::node::{read_node, write_node};
}
