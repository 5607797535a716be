use super::*;

/// Tests that the first write creates the row.
///
/// Expected: Ok with provided fields set and the rest None
#[tokio::test]
async fn creates_row_on_first_write() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigurationRepository::new(db);
    let config = repo
        .upsert(
            "123456789",
            UpdateGuildConfigurationParam {
                welcome_message: Some(Some("Hi {user}".to_string())),
                welcome_channel_id: Some(Some("111".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(config.guild_id, "123456789");
    assert_eq!(config.welcome_message.as_deref(), Some("Hi {user}"));
    assert_eq!(config.welcome_channel_id.as_deref(), Some("111"));
    assert!(config.welcome_image_url.is_none());
    assert!(config.invite_logs_channel_id.is_none());

    let stored = repo.find_by_guild_id("123456789").await?;
    assert_eq!(stored, Some(config));

    Ok(())
}

/// Tests that writing only the channel keeps a stored message.
///
/// Expected: Ok with welcome_message unchanged and welcome_channel_id updated
#[tokio::test]
async fn merges_only_provided_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_configuration::GuildConfigurationFactory::new(db)
        .guild_id("123")
        .welcome_message("Hello {user}")
        .welcome_channel_id("111")
        .invite_logs_channel_id("999")
        .build()
        .await?;

    let repo = GuildConfigurationRepository::new(db);
    let config = repo
        .upsert(
            "123",
            UpdateGuildConfigurationParam {
                welcome_channel_id: Some(Some("222".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(config.welcome_message.as_deref(), Some("Hello {user}"));
    assert_eq!(config.welcome_channel_id.as_deref(), Some("222"));
    assert_eq!(config.invite_logs_channel_id.as_deref(), Some("999"));

    Ok(())
}

/// Tests that two sequential writes keep a single row.
///
/// The second write overrides only the fields it specifies.
///
/// Expected: Ok with one row holding the merged values
#[tokio::test]
async fn sequential_upserts_keep_single_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigurationRepository::new(db);
    repo.upsert(
        "123",
        UpdateGuildConfigurationParam {
            welcome_message: Some(Some("First".to_string())),
            welcome_image_url: Some(Some("https://example.com/1.png".to_string())),
            ..Default::default()
        },
    )
    .await?;
    let config = repo
        .upsert(
            "123",
            UpdateGuildConfigurationParam {
                welcome_message: Some(Some("Second".to_string())),
                invite_logs_channel_id: Some(Some("444".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(config.welcome_message.as_deref(), Some("Second"));
    assert_eq!(
        config.welcome_image_url.as_deref(),
        Some("https://example.com/1.png")
    );
    assert_eq!(config.invite_logs_channel_id.as_deref(), Some("444"));

    let count = entity::prelude::GuildConfiguration::find()
        .filter(entity::guild_configuration::Column::GuildId.eq("123"))
        .count(db)
        .await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that an explicit clear sets the column back to NULL.
///
/// Expected: Ok with the cleared field None and others untouched
#[tokio::test]
async fn clears_field_set_to_none() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_configuration::GuildConfigurationFactory::new(db)
        .guild_id("123")
        .welcome_message("Hello")
        .welcome_image_url("https://example.com/banner.png")
        .build()
        .await?;

    let repo = GuildConfigurationRepository::new(db);
    let config = repo
        .upsert(
            "123",
            UpdateGuildConfigurationParam {
                welcome_image_url: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert!(config.welcome_image_url.is_none());
    assert_eq!(config.welcome_message.as_deref(), Some("Hello"));

    Ok(())
}

/// Tests that an empty update still creates the row.
///
/// Expected: Ok with a row whose settings are all None
#[tokio::test]
async fn empty_update_creates_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GuildConfigurationRepository::new(db);
    let config = repo
        .upsert("123", UpdateGuildConfigurationParam::default())
        .await?;

    assert_eq!(config.guild_id, "123");
    assert!(config.welcome_message.is_none());
    assert!(repo.find_by_guild_id("123").await?.is_some());

    Ok(())
}

/// Tests that updates preserve created_at and advance updated_at.
///
/// Expected: Ok with created_at unchanged
#[tokio::test]
async fn preserves_created_at() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let original = factory::guild_configuration::GuildConfigurationFactory::new(db)
        .guild_id("123")
        .build()
        .await?;

    let repo = GuildConfigurationRepository::new(db);
    let config = repo
        .upsert(
            "123",
            UpdateGuildConfigurationParam {
                invite_logs_channel_id: Some(Some("5".to_string())),
                ..Default::default()
            },
        )
        .await?;

    let diff = (config.created_at - original.created_at)
        .num_seconds()
        .abs();
    assert!(diff < 1, "created_at should not have changed");
    assert!(config.updated_at >= original.updated_at);

    Ok(())
}

/// Tests that configurations of different guilds are independent.
///
/// Expected: Ok with the other guild's row untouched
#[tokio::test]
async fn leaves_other_guilds_untouched() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_guild_configuration_table()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::guild_configuration::GuildConfigurationFactory::new(db)
        .guild_id("111")
        .welcome_message("Guild one")
        .build()
        .await?;

    let repo = GuildConfigurationRepository::new(db);
    repo.upsert(
        "222",
        UpdateGuildConfigurationParam {
            welcome_message: Some(Some("Guild two".to_string())),
            ..Default::default()
        },
    )
    .await?;

    let first = repo.find_by_guild_id("111").await?.unwrap();
    assert_eq!(first.welcome_message.as_deref(), Some("Guild one"));

    let count = entity::prelude::GuildConfiguration::find().count(db).await?;
    assert_eq!(count, 2);

    Ok(())
}
