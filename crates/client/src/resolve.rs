// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Host validation via DNS.
//!
//! Mutating actions (and the status query) only proceed when the target
//! hostname resolves to at least one address record. The lookup is live,
//! uncached, and unretried; the trait seam exists so tests can stub it.

use std::net::ToSocketAddrs;
use tracing::debug;

/// Answers whether a hostname resolves via DNS.
pub trait HostResolver {
    /// Returns `true` iff `host` resolves to at least one address record.
    fn resolves(&self, host: &str) -> bool;
}

/// Live system resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct DnsResolver;

impl HostResolver for DnsResolver {
    fn resolves(&self, host: &str) -> bool {
        // Port 0 satisfies the socket-address form; only the lookup matters.
        match (host, 0_u16).to_socket_addrs() {
            Ok(mut addrs) => {
                let found: bool = addrs.next().is_some();
                debug!(host = %host, found = found, "DNS lookup");
                found
            }
            Err(err) => {
                debug!(host = %host, error = %err, "DNS lookup failed");
                false
            }
        }
    }
}
