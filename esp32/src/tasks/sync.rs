//! SNTP synchronization task.
//!
//! Resolves the configured pool, performs an SNTP exchange with `sntpc`, and
//! anchors the shared wall clock with the result. Failures are logged and
//! retried; nothing downstream ever sees an error, only a clock that is not
//! yet (or no longer freshly) synchronized.

use core::net::{IpAddr, SocketAddr};

use defmt::{info, warn};
use embassy_net::dns::DnsQueryType;
use embassy_net::udp::{PacketMetadata, UdpSocket};
use embassy_net::{IpAddress, Stack};
use embassy_time::{Instant, Timer};
use medclock_common::config::{SNTP_RESYNC_SECS, SNTP_RETRY_SECS, SNTP_SERVER};
use sntpc::{NtpContext, NtpTimestampGenerator, get_time};

use super::WALL_CLOCK;

const NTP_PORT: u16 = 123;

/// Request timestamps for sntpc's offset bookkeeping, taken from the Embassy
/// monotonic clock.
#[derive(Copy, Clone, Default)]
struct EmbassyTimestamp {
    ms: u64,
}

impl NtpTimestampGenerator for EmbassyTimestamp {
    fn init(&mut self) {
        self.ms = Instant::now().as_millis();
    }

    fn timestamp_sec(&self) -> u64 {
        self.ms / 1000
    }

    fn timestamp_subsec_micros(&self) -> u32 {
        ((self.ms % 1000) * 1000) as u32
    }
}

#[embassy_executor::task]
pub async fn sntp_task(stack: Stack<'static>) {
    stack.wait_config_up().await;
    info!("Network configured, starting SNTP");

    let mut rx_meta = [PacketMetadata::EMPTY; 4];
    let mut tx_meta = [PacketMetadata::EMPTY; 4];
    let mut rx_buffer = [0u8; 512];
    let mut tx_buffer = [0u8; 512];
    let mut socket = UdpSocket::new(stack, &mut rx_meta, &mut rx_buffer, &mut tx_meta, &mut tx_buffer);
    if let Err(e) = socket.bind(NTP_PORT) {
        // Without a socket there is no time source at all; keep the task
        // alive so the log shows why the clock never syncs.
        warn!("SNTP socket bind failed: {:?}", e);
        return;
    }

    loop {
        match exchange(stack, &socket).await {
            Ok(unix_secs) => {
                let monotonic_ms = Instant::now().as_millis();
                WALL_CLOCK.lock().await.sync(unix_secs, monotonic_ms);
                info!("SNTP sync ok: unix={}", unix_secs);
                Timer::after_secs(SNTP_RESYNC_SECS).await;
            }
            Err(e) => {
                warn!("SNTP sync failed: {=str}", e);
                Timer::after_secs(SNTP_RETRY_SECS).await;
            }
        }
    }
}

/// One DNS lookup plus SNTP exchange; returns Unix seconds from the server.
async fn exchange(stack: Stack<'static>, socket: &UdpSocket<'_>) -> Result<u64, &'static str> {
    let addrs = stack
        .dns_query(SNTP_SERVER, DnsQueryType::A)
        .await
        .map_err(|_| "dns query failed")?;
    let Some(IpAddress::Ipv4(v4)) = addrs.first().copied() else {
        return Err("no A record");
    };

    let server = SocketAddr::new(IpAddr::V4(v4), NTP_PORT);
    let context = NtpContext::new(EmbassyTimestamp::default());
    let result = get_time(server, socket, context).await.map_err(|_| "ntp exchange failed")?;

    Ok(u64::from(result.sec()))
}
