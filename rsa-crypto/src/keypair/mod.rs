pub mod keys;
pub mod params;

pub use keys::{
    KeyComponents, PrivateKey, PublicKey, generate_key_components, generate_keypair,
    generate_keypair_with,
};
pub use params::KeyGenParams;
