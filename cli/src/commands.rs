//! Command bodies for the interactive CLI.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use rouser_core::monitor::ActivityKind;
use rouser_core::wol::{MacAddress, TriggerOutcome, TriggerResult, resolve_broadcast};
use rouser_types::formatting::{format_elapsed_opt, format_target};

use crate::AppState;

/// Manually trigger a wake through the engine.
pub async fn wake(state: Arc<AppState>, reason: &str) {
    let (wake_config, show_messages) = {
        let config = state.config.read().await;
        (config.wake_config(), config.show_user_messages)
    };
    let result = state.trigger.try_send(&wake_config, reason).await;
    print_result(&result, show_messages);
}

/// Feed one observed activity through the classifier.
pub async fn observe(state: Arc<AppState>, kind: ActivityKind, path: &str) {
    let (settings, wake_config, show_messages) = {
        let config = state.config.read().await;
        (
            config.monitor_settings(),
            config.wake_config(),
            config.show_user_messages,
        )
    };
    match state.monitor.observe(kind, path, &settings, &wake_config).await {
        Some(result) => print_result(&result, show_messages),
        None => println!("Activity ignored (not remote, or auto-wake gated off)"),
    }
}

#[derive(Serialize)]
struct StatusSnapshot {
    mac_address: String,
    broadcast_target: String,
    cooldown_seconds: u64,
    min_wake_interval_seconds: u64,
    max_wake_attempts: u32,
    enable_auto_wake: bool,
    attempt_count: u32,
    secs_since_last_sent: Option<u64>,
    time_since_last_sent: String,
    timestamp: DateTime<Utc>,
}

/// Print engine + configuration status as JSON.
pub async fn status(state: Arc<AppState>) {
    let config = state.config.read().await;
    let secs = state.trigger.secs_since_last_sent();
    let snapshot = StatusSnapshot {
        mac_address: config.mac_address.clone(),
        broadcast_target: format_target(&config.broadcast_address, config.broadcast_port),
        cooldown_seconds: config.cooldown_seconds,
        min_wake_interval_seconds: config.min_wake_interval_seconds,
        max_wake_attempts: config.max_wake_attempts,
        enable_auto_wake: config.enable_auto_wake,
        attempt_count: state.trigger.attempt_count(),
        secs_since_last_sent: secs,
        time_since_last_sent: format_elapsed_opt(secs),
        timestamp: Utc::now(),
    };
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Failed to render status: {err}"),
    }
}

/// Zero the attempt counter.
pub async fn reset(state: Arc<AppState>) {
    state.trigger.reset().await;
    println!("Attempt counter reset");
}

/// Print the loaded configuration.
pub async fn show_config(state: Arc<AppState>) {
    let config = state.config.read().await;
    match serde_json::to_string_pretty(&*config) {
        Ok(json) => println!("{json}"),
        Err(err) => println!("Failed to render config: {err}"),
    }
}

/// Set and persist the target MAC address.
pub async fn set_mac(state: Arc<AppState>, mac: &str) {
    if !MacAddress::is_valid(mac) {
        println!("Invalid MAC address: {mac}");
        return;
    }
    let mut config = state.config.write().await;
    config.mac_address = mac.to_string();
    config.save();
    println!("MAC address set to {mac}");
}

/// Set and persist the broadcast address.
pub async fn set_broadcast(state: Arc<AppState>, address: &str) {
    let mut config = state.config.write().await;
    if let Err(err) = resolve_broadcast(address, config.broadcast_port) {
        println!("{err}");
        return;
    }
    config.broadcast_address = address.to_string();
    config.save();
    println!("Broadcast address set to {address}");
}

/// Set and persist the broadcast port.
pub async fn set_port(state: Arc<AppState>, port: u16) {
    let mut config = state.config.write().await;
    config.broadcast_port = port;
    config.save();
    println!("Broadcast port set to {port}");
}

pub fn exit() {
    println!("Exiting");
}

fn print_result(result: &TriggerResult, show_messages: bool) {
    match &result.outcome {
        TriggerOutcome::Sent => {
            let mac = result.mac.map(|m| m.to_string()).unwrap_or_default();
            println!(
                "Magic packet sent to {} (attempt {})",
                mac, result.attempt_count
            );
            if show_messages {
                println!("Archival storage is being woken up");
            }
        }
        TriggerOutcome::Denied(reason) => println!("Wake suppressed: {reason}"),
        TriggerOutcome::InFlight => println!("Wake already in progress, try again shortly"),
        TriggerOutcome::Config(err) => println!("Configuration error: {err}"),
        TriggerOutcome::Transmit(err) => println!("Send failed: {err}"),
    }
}
