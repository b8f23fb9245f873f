use openssl::pkey::PKey;
use openssl::rsa::Rsa;

use crate::services::jsonwebtoken::KeyPair;

/// Fresh 2048-bit RSA key as `(private PKCS#8 PEM, public PEM)`.
pub fn generate_pem_pair() -> (Vec<u8>, Vec<u8>) {
    let pkey = PKey::from_rsa(Rsa::generate(2048).unwrap()).unwrap();

    (
        pkey.private_key_to_pem_pkcs8().unwrap(),
        pkey.public_key_to_pem().unwrap(),
    )
}

pub fn generate_keypair() -> KeyPair {
    let (private_key, public_key) = generate_pem_pair();

    KeyPair::from_rsa_pem(private_key, public_key).unwrap()
}
