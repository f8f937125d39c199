mod bot_config;
mod key;
