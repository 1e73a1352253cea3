//! Tests for the printed blocks and their plaintext.

use crate::support::*;
use std::collections::HashSet;

#[test]
fn test_no_patterns_prints_only_environment() {
    let t = Test::new();

    let output = t.run(&[]);
    assert_success(&output);

    let blocks = blocks(&stdout(&output));
    assert_eq!(blocks.len(), 1);
    assert_eq!(blocks[0].label, ENV_LABEL);
}

#[test]
fn test_environment_block_decrypts_to_environment() {
    let t = Test::new();

    let output = t
        .cmd()
        .env_clear()
        .env("AGE_RECIPIENT", t.recipient())
        .env("NO_COLOR", "1")
        .env("API_TOKEN", "sk-test-12345")
        .output()
        .unwrap();
    assert_success(&output);

    let blocks = blocks(&stdout(&output));
    let plaintext = blocks[0].decrypt_string(&t.identity);
    let lines: HashSet<&str> = plaintext.split('\n').collect();
    let recipient_line = format!("AGE_RECIPIENT={}", t.recipient());
    let expected: HashSet<&str> = [
        recipient_line.as_str(),
        "NO_COLOR=1",
        "API_TOKEN=sk-test-12345",
    ]
    .into_iter()
    .collect();

    assert_eq!(lines, expected);
    assert!(!plaintext.ends_with('\n'));
}

#[test]
fn test_file_block_decrypts_to_contents() {
    let t = Test::new();
    t.write("hello.txt", b"hello");

    let output = t.run(&["hello.txt"]);
    assert_success(&output);

    let blocks = blocks(&stdout(&output));
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].label, ENV_LABEL);
    assert_eq!(blocks[1].label, "hello.txt");
    assert_eq!(blocks[1].decrypt(&t.identity), b"hello");
}

#[test]
fn test_binary_file_roundtrip() {
    let t = Test::new();
    let payload: Vec<u8> = (0..=255u8).cycle().take(4096).collect();
    t.write("blob.bin", &payload);

    let output = t.run(&["blob.bin"]);
    assert_success(&output);

    let blocks = blocks(&stdout(&output));
    assert_eq!(blocks[1].decrypt(&t.identity), payload);
}

#[test]
fn test_empty_file_is_emitted() {
    let t = Test::new();
    t.write("empty", b"");

    let output = t.run(&["empty"]);
    assert_success(&output);

    let blocks = blocks(&stdout(&output));
    assert_eq!(blocks.len(), 2);
    assert!(blocks[1].decrypt(&t.identity).is_empty());
}

#[test]
fn test_blocks_are_armored_and_separated() {
    let t = Test::new();
    t.write("a.txt", b"a");

    let output = t.run(&["a.txt"]);
    assert_success(&output);
    let out = stdout(&output);

    assert!(out.starts_with("Environment variables\n-----BEGIN AGE ENCRYPTED FILE-----\n"));
    assert!(out.contains(
        "-----END AGE ENCRYPTED FILE-----\n\na.txt\n-----BEGIN AGE ENCRYPTED FILE-----\n"
    ));
    assert!(out.ends_with("-----END AGE ENCRYPTED FILE-----\n\n"));
}

#[test]
fn test_plaintext_never_appears_on_stdout() {
    let t = Test::new();
    t.write("secret.txt", b"correct horse battery staple");

    let output = t
        .cmd()
        .env("DB_PASSWORD", "hunter2-very-secret")
        .arg("secret.txt")
        .output()
        .unwrap();
    assert_success(&output);

    let out = stdout(&output);
    assert!(!out.contains("correct horse battery staple"));
    assert!(!out.contains("hunter2-very-secret"));
}

#[test]
fn test_same_file_twice_gives_different_ciphertext() {
    let t = Test::new();
    t.write("same.txt", b"same");

    let first = blocks(&stdout(&t.run(&["same.txt"])));
    let second = blocks(&stdout(&t.run(&["same.txt"])));

    assert_ne!(first[1].armored, second[1].armored);
    assert_eq!(first[1].decrypt(&t.identity), second[1].decrypt(&t.identity));
}

#[test]
fn test_other_recipient_cannot_decrypt() {
    let t = Test::new();
    t.write("x.txt", b"x");

    let output = t
        .cmd()
        .env("AGE_RECIPIENT", OTHER_PUBLIC_KEY)
        .arg("x.txt")
        .output()
        .unwrap();
    assert_success(&output);

    let blocks = blocks(&stdout(&output));
    let reader = age::armor::ArmoredReader::new(blocks[1].armored.as_bytes());
    let decryptor = age::Decryptor::new(reader).unwrap();
    assert!(decryptor
        .decrypt(std::iter::once(&t.identity as &dyn age::Identity))
        .is_err());
}
