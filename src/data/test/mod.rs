mod guild_configuration;
