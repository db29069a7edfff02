//! WiFi connection management and the network stack runner.

use defmt::{info, warn};
use embassy_net::Runner;
use embassy_time::Timer;
use esp_wifi::wifi::{
    ClientConfiguration,
    Configuration,
    WifiController,
    WifiDevice,
    WifiEvent,
    WifiState,
    wifi_state,
};

/// Build-time WiFi credentials. The defaults keep credential-less builds
/// compiling; a real deployment sets both variables.
const WIFI_SSID: &str = match option_env!("MEDCLOCK_WIFI_SSID") {
    Some(v) => v,
    None => "medclock",
};
const WIFI_PASSWORD: &str = match option_env!("MEDCLOCK_WIFI_PASSWORD") {
    Some(v) => v,
    None => "",
};

/// Drive the embassy-net stack.
#[embassy_executor::task]
pub async fn net_task(mut runner: Runner<'static, WifiDevice<'static>>) -> ! {
    runner.run().await
}

/// Keep the station association alive, reconnecting after drops.
#[embassy_executor::task]
pub async fn connection_task(mut controller: WifiController<'static>) {
    info!("WiFi connection task started");

    loop {
        if wifi_state() == WifiState::StaConnected {
            // Wait until we lose the association, then back off before retrying
            controller.wait_for_event(WifiEvent::StaDisconnected).await;
            warn!("WiFi disconnected");
            Timer::after_secs(5).await;
        }

        if !matches!(controller.is_started(), Ok(true)) {
            let client_config = Configuration::Client(ClientConfiguration {
                ssid: WIFI_SSID.into(),
                password: WIFI_PASSWORD.into(),
                ..Default::default()
            });
            controller.set_configuration(&client_config).ok();
            info!("Starting WiFi");
            if let Err(e) = controller.start_async().await {
                warn!("WiFi start failed: {:?}", e);
                Timer::after_secs(5).await;
                continue;
            }
        }

        info!("Connecting to {=str}", WIFI_SSID);
        match controller.connect_async().await {
            Ok(()) => info!("WiFi connected"),
            Err(e) => {
                warn!("WiFi connect failed: {:?}", e);
                Timer::after_secs(5).await;
            }
        }
    }
}
