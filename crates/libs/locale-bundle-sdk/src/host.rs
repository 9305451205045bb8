/// Host-side provider of the application's version code.
///
/// The version code is stamped into every generated bundle so the host can
/// detect configurations saved by a newer plugin release.
pub trait HostContext: Send + Sync {
    fn version_code(&self) -> i32;
}

/// `HostContext` for hosts and tests that already know their version code.
#[derive(Clone, Copy, Debug)]
pub struct FixedVersionContext(pub i32);

impl HostContext for FixedVersionContext {
    fn version_code(&self) -> i32 {
        self.0
    }
}
