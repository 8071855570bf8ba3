mod config_init;
