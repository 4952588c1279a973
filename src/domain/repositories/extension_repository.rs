use async_trait::async_trait;

/// Queries and toggles GNOME Shell extensions. State is recomputed from tool
/// output on every call, never cached.
///
/// Failure defaults are asymmetric on purpose: the global switch fails open
/// (a diagnostic failure must not block all functionality) while the
/// per-extension enabled check fails closed (false is the safer answer for a
/// single extension).
#[async_trait]
pub trait ExtensionRepository: Send + Sync {
    /// True unless the shell's master disable-extensions switch is explicitly
    /// set. Fails open on any query failure.
    async fn globally_enabled(&self) -> bool;

    /// Writes the master switch. False on command failure; never retried.
    async fn set_globally_enabled(&self, enabled: bool) -> bool;

    /// True when a directory named `uuid` exists under the per-user or
    /// system-wide extension directories.
    async fn is_installed(&self, uuid: &str) -> bool;

    /// Membership in the enabled-extensions list. Fails closed on any
    /// query or parse failure.
    async fn is_enabled(&self, uuid: &str) -> bool;

    /// Adds or removes `uuid` from the enabled-extensions list, writing the
    /// list back in the tool's literal syntax. False on command failure.
    async fn toggle(&self, uuid: &str, enable: bool) -> bool;
}
