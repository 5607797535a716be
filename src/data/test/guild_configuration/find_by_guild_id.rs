use super::*;

/// Tests finding a configuration that exists.
///
/// Expected: Ok(Some(config)) with every stored field
#[tokio::test]
async fn finds_existing_configuration() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_configuration::GuildConfigurationFactory::new(db)
        .guild_id("123456789")
        .welcome_message("Welcome {user}!")
        .welcome_channel_id("111")
        .welcome_image_url("https://example.com/banner.png")
        .invite_logs_channel_id("222")
        .build()
        .await?;

    let repo = GuildConfigurationRepository::new(db);
    let config = repo.find_by_guild_id("123456789").await?.unwrap();

    assert_eq!(config.guild_id, "123456789");
    assert_eq!(config.welcome_message.as_deref(), Some("Welcome {user}!"));
    assert_eq!(config.welcome_channel_id.as_deref(), Some("111"));
    assert_eq!(
        config.welcome_image_url.as_deref(),
        Some("https://example.com/banner.png")
    );
    assert_eq!(config.invite_logs_channel_id.as_deref(), Some("222"));

    Ok(())
}

/// Tests that an unconfigured guild has no row.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unconfigured_guild() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_guild_configuration(db).await?;

    let repo = GuildConfigurationRepository::new(db);
    let result = repo.find_by_guild_id("999999999").await?;

    assert!(result.is_none());

    Ok(())
}

/// Tests that a row with every setting unset is still returned.
///
/// An empty row and a missing row are different states.
///
/// Expected: Ok(Some(config)) with all settings None
#[tokio::test]
async fn returns_row_with_all_settings_unset() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_configuration::GuildConfigurationFactory::new(db)
        .guild_id("123")
        .build()
        .await?;

    let repo = GuildConfigurationRepository::new(db);
    let config = repo.find_by_guild_id("123").await?.unwrap();

    assert!(config.welcome_message.is_none());
    assert!(config.welcome_channel_id.is_none());
    assert!(config.welcome_image_url.is_none());
    assert!(config.invite_logs_channel_id.is_none());

    Ok(())
}

/// Tests finding the right guild among several.
///
/// Expected: Ok(Some(config)) for the requested guild only
#[tokio::test]
async fn finds_correct_guild_among_multiple() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    for (guild_id, channel_id) in [("111", "1"), ("222", "2"), ("333", "3")] {
        factory::guild_configuration::GuildConfigurationFactory::new(db)
            .guild_id(guild_id)
            .invite_logs_channel_id(channel_id)
            .build()
            .await?;
    }

    let repo = GuildConfigurationRepository::new(db);
    let config = repo.find_by_guild_id("222").await?.unwrap();

    assert_eq!(config.guild_id, "222");
    assert_eq!(config.invite_logs_channel_id.as_deref(), Some("2"));

    Ok(())
}

/// Tests that a missing table surfaces as an error instead of "no configuration".
///
/// Expected: Err(DbErr)
#[tokio::test]
async fn fails_when_store_is_unavailable() -> Result<(), DbErr> {
    let test = TestBuilder::new().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigurationRepository::new(db);
    let result = repo.find_by_guild_id("123").await;

    assert!(result.is_err());

    Ok(())
}
