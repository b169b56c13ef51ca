use rsa_crypto::errors::RsaCryptoError;
use rsa_crypto::keypair::{KeyGenParams, generate_key_components, generate_keypair};
use rsa_crypto::{Ciphertext, decrypt, encrypt};

use rand::SeedableRng;
use rand::rngs::StdRng;

#[test]
fn happy_flow() -> Result<(), RsaCryptoError> {
    let (public_key, private_key) = generate_keypair()?;

    let original_data = "Heh safasdkjfhkjas fha sdf asda".to_string();

    let cipher = encrypt(&public_key, &original_data)?;
    let stored = cipher.to_json()?;

    let restored = Ciphertext::from_json(&stored)?;
    let decoded_data = decrypt(&private_key, &restored)?;

    assert_eq!(original_data, decoded_data);

    Ok(())
}

#[test]
fn keys_survive_json_storage() -> Result<(), RsaCryptoError> {
    let mut rng = StdRng::seed_from_u64(2024);
    let components = generate_key_components(&KeyGenParams::default(), &mut rng)?;

    let public_json = rsa_crypto::codec::to_json(&components.public_key())?;
    let private_json = rsa_crypto::codec::to_json(&components.private_key())?;
    assert!(public_json.starts_with('[') && public_json.ends_with(']'));

    let public_key = rsa_crypto::codec::from_json(&public_json)?;
    let private_key = rsa_crypto::codec::from_json(&private_json)?;

    let cipher = encrypt(&public_key, "stored keys still work")?;
    assert_eq!(decrypt(&private_key, &cipher)?, "stored keys still work");

    Ok(())
}

#[test]
fn every_generated_keypair_roundtrips_ascii() -> Result<(), RsaCryptoError> {
    let mut rng = StdRng::seed_from_u64(7);
    let params = KeyGenParams::default();
    let ascii: String = (0u8..128).map(char::from).collect();

    for _ in 0..50 {
        let components = generate_key_components(&params, &mut rng)?;
        components.verify()?;

        let cipher = encrypt(&components.public_key(), &ascii)?;
        assert_eq!(cipher.len(), 128);
        assert!(cipher.iter().all(|&unit| unit < components.modulus));
        assert_eq!(decrypt(&components.private_key(), &cipher)?, ascii);
    }

    Ok(())
}

#[test]
fn custom_prime_range() -> Result<(), RsaCryptoError> {
    let params = KeyGenParams::try_with(1_000, 2_000, 1_000)?;
    let components = generate_key_components(&params, &mut StdRng::seed_from_u64(3))?;
    components.verify()?;
    assert!(components.modulus > 1_000_000);

    // Anything in the Basic Multilingual Plane fits under a modulus above 2^16.
    let text = "Привіт, 世界! ✓";
    let cipher = encrypt(&components.public_key(), text)?;
    assert_eq!(decrypt(&components.private_key(), &cipher)?, text);

    Ok(())
}
