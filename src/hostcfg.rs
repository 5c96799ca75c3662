//! Host configuration hook.
//!
//! Once the engine has placed a host into the running emulation, the host
//! still needs its interface MTU, a default route through its gateway,
//! and a static ARP entry for every other known host before it can
//! participate in traffic. This module generates that fixed command
//! sequence as data; executing it is the engine's job. The sequence is
//! fire-and-forget: nothing here observes or retries command failures,
//! and re-running the same sequence is harmless.

use crate::topology::{Node, Topology};
use crate::utils::strip_prefix;
use std::collections::BTreeMap;

/// Address pair for one known peer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PeerEntry {
    /// Peer IP address, without prefix length
    pub ip: String,
    /// Peer MAC address
    pub mac: String,
}

/// Static table of all hosts with complete addressing, keyed by identifier.
pub type PeerTable = BTreeMap<String, PeerEntry>;

/// Collect the peer table of a topology: every host that declares both an
/// IP and a MAC address.
pub fn peer_table(topology: &Topology) -> PeerTable {
    let mut table = PeerTable::new();
    for host in topology.hosts() {
        if let (Some(ip), Some(mac)) = (&host.ip, &host.mac) {
            table.insert(
                host.id.clone(),
                PeerEntry { ip: strip_prefix(ip).to_string(), mac: mac.clone() },
            );
        }
    }
    table
}

/// Generate the post-creation command sequence for one host.
///
/// Order matches what the engine expects: interface MTU first, then the
/// default route via `gateway`, then one static ARP entry per peer other
/// than the host itself (exactly N-1 entries for a table of N). Hosts
/// without a declared MTU skip the MTU command.
pub fn configuration_commands(host: &Node, gateway: &str, peers: &PeerTable) -> Vec<String> {
    let mut commands = Vec::new();
    if let Some(mtu) = host.mtu {
        commands.push(format!("ifconfig {}-eth0 mtu {}", host.id, mtu));
    }
    commands.push(format!("ip route add default via {}", gateway));
    for (peer_id, entry) in peers {
        if peer_id != &host.id {
            commands.push(format!("arp -s {} {}", entry.ip, entry.mac));
        }
    }
    commands
}

/// Wrap a command sequence into a shell script body.
pub fn render_script(host_id: &str, commands: &[String]) -> String {
    let mut script = String::from("#!/bin/sh\n");
    script.push_str(&format!("# post-creation configuration for host {}\n", host_id));
    for command in commands {
        script.push_str(command);
        script.push('\n');
    }
    script
}
