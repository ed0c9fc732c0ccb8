#[cfg(test)]
mod tests {
    use std::thread;

    use base64::{Engine as _, engine::general_purpose};
    use ed25519_dalek::{Signer, SigningKey};
    use rand_core::OsRng;

    use crate::{
        application::verif_service::SignatureVerifier,
        domain::config::{VerifierConfig, VerifyMode},
    };

    struct Case {
        public_key: String,
        signature: String,
        message: String,
    }

    fn build_cases(count: usize) -> Vec<Case> {
        (0..count)
            .map(|i| {
                let sk = SigningKey::generate(&mut OsRng);
                let message = format!("message #{i}");
                let signature = sk.sign(message.as_bytes());
                let public_key = general_purpose::STANDARD.encode(sk.verifying_key().as_bytes());
                let mut signature = general_purpose::STANDARD.encode(signature.to_bytes());

                // un cas sur trois est corrompu, un sur cinq mal encodé
                if i % 3 == 0 {
                    let mut raw = general_purpose::STANDARD.decode(&signature).unwrap();
                    raw[i % 32] ^= 0x01;
                    signature = general_purpose::STANDARD.encode(raw);
                } else if i % 5 == 0 {
                    signature.insert(0, '#');
                }

                Case {
                    public_key,
                    signature,
                    message,
                }
            })
            .collect()
    }

    #[test]
    fn verifier_is_send_sync_and_copy() {
        fn assert_traits<T: Send + Sync + Copy + 'static>() {}
        assert_traits::<SignatureVerifier>();
    }

    #[test]
    fn concurrent_results_match_sequential() {
        let verifier = SignatureVerifier::new(VerifierConfig::new(VerifyMode::Standard));
        let cases = build_cases(64);

        let sequential: Vec<bool> = cases
            .iter()
            .map(|c| verifier.verify(&c.public_key, &c.signature, c.message.as_str()))
            .collect();

        assert!(sequential.iter().any(|&ok| ok));
        assert!(sequential.iter().any(|&ok| !ok));

        let concurrent: Vec<Vec<bool>> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|worker| {
                    let cases = &cases;
                    scope.spawn(move || {
                        // chaque thread parcourt les cas dans un ordre différent
                        let mut results = vec![false; cases.len()];
                        for step in 0..cases.len() {
                            let idx = (step * 7 + worker * 13) % cases.len();
                            let c = &cases[idx];
                            results[idx] =
                                verifier.verify(&c.public_key, &c.signature, c.message.as_str());
                        }
                        results
                    })
                })
                .collect();

            handles
                .into_iter()
                .map(|h| h.join().expect("worker panicked"))
                .collect()
        });

        for results in concurrent {
            assert_eq!(results, sequential);
        }
    }
}
