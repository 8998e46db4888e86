//! Global configuration constants.
//!
//! Cryptographic parameters, the encrypted container layout, and UX policy
//! all live here. The cipher parameters are a fixed contract: changing any
//! of them breaks decryption of previously written files, so they are not
//! exposed as runtime options.

/// Application name used in user-facing output.
pub const APP_NAME: &str = "CipherScope";

/// File extension for encrypted containers.
///
/// Identifies files written by this tool. Decryption and analysis accept
/// any path; the extension only drives output-path derivation and the
/// wizard's file filtering.
pub const FILE_EXTENSION: &str = ".csx";

// === Key derivation parameters ===

/// PBKDF2-HMAC-SHA256 iteration count.
///
/// Used symmetrically by encryption and decryption. This value is part of
/// the on-disk compatibility contract: a container written with one count
/// can only be opened with the same count, and no field in the container
/// records it. Treat as frozen.
pub const PBKDF2_ITERATIONS: u32 = 200_000;

/// Length of the derived AES-256 key in bytes.
pub const KEY_SIZE: usize = 32;

/// Length of the PBKDF2 salt in bytes.
///
/// Generated fresh per encryption and stored in the clear at the front of
/// the container. Not secret; its only job is making identical passwords
/// derive distinct keys.
pub const SALT_SIZE: usize = 16;

// === Cipher parameters ===

/// AES block size in bytes. Also the PKCS#7 padding boundary.
pub const BLOCK_SIZE: usize = 16;

/// Length of the CBC initialization vector in bytes.
///
/// Generated fresh per encryption, independent of the salt, and stored in
/// the clear after the salt.
pub const IV_SIZE: usize = 16;

/// Combined length of the clear-text container prefix (salt + IV).
///
/// Any container shorter than this is structurally invalid.
pub const CONTAINER_OVERHEAD: usize = SALT_SIZE + IV_SIZE;

// === User interface policy ===

/// Minimum password length enforced by the interactive prompts.
///
/// This is a UX guard only. The crypto core rejects empty passwords and
/// nothing else; passwords supplied via `--password` bypass this check so
/// scripted callers keep full control.
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// File and directory patterns excluded from wizard file discovery.
///
/// Keeps build artifacts, VCS metadata, and key material out of the file
/// picker so users do not encrypt something load-bearing by accident.
pub const EXCLUDED_PATTERNS: &[&str] = &[
    "target",       // Rust build artifacts
    "vendor",       // vendored dependencies
    "node_modules", // Node.js dependencies
    ".git",         // Git repository metadata
    ".github",      // GitHub workflows and metadata
    ".config",      // user configuration files
    ".local",       // local user data
    ".cache",       // application cache files
    ".ssh",         // SSH keys and configuration
    ".gnupg",       // GPG keys and configuration
    "*.rs",         // Rust source files
    "*.go",         // Go source files
];
