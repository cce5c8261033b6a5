//! Room lifecycle: create, join, leave, list.

mod common;

use common::{TestClient, TestServer};

async fn logged_in(server: &TestServer, name: &str) -> anyhow::Result<TestClient> {
    let mut client = TestClient::connect(&server.address()).await?;
    client.login(name, "pw").await?;
    Ok(client)
}

#[tokio::test]
async fn create_succeeds_then_duplicates() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;

    alice.send_line("!create general").await?;
    assert_eq!(alice.recv().await?, "!create Created new room 'general'!");

    alice.send_line("!create general").await?;
    assert_eq!(alice.recv().await?, "!error Room 'general' already exists");
    Ok(())
}

#[tokio::test]
async fn create_enforces_name_rules() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;

    alice.send_line("!create imposters").await?;
    assert_eq!(
        alice.recv().await?,
        "!error Rooms starting with 'IM' are reserved - use !im for direct messages"
    );

    alice.send_line("!create a|b").await?;
    assert_eq!(
        alice.recv().await?,
        "!error Sorry, rooms cannot contain the characters | or ! due to implementation details"
    );

    alice.send_line("!create loud!room").await?;
    assert_eq!(
        alice.recv().await?,
        "!error Sorry, rooms cannot contain the characters | or ! due to implementation details"
    );
    Ok(())
}

#[tokio::test]
async fn join_validates_room() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;

    alice.send_line("!join nowhere").await?;
    assert_eq!(alice.recv().await?, "!error Cannot recognize room 'nowhere'");

    alice.send_line("!join IM alice bob").await?;
    assert_eq!(
        alice.recv().await?,
        "!error Rooms starting with 'IM' are reserved - use !im for direct messages"
    );

    alice.send_line("!create general").await?;
    alice.recv().await?;
    alice.send_line("!join general").await?;
    assert_eq!(alice.recv().await?, "!join Joined room 'general'!");

    alice.send_line("!join general").await?;
    assert_eq!(alice.recv().await?, "!error You have already joined room 'general'");
    Ok(())
}

#[tokio::test]
async fn leave_is_all_or_nothing() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;

    alice.send_line("!create a").await?;
    alice.recv().await?;
    alice.send_line("!create b").await?;
    alice.recv().await?;
    alice.send_line("!join a").await?;
    alice.recv().await?;

    // b exists but alice never joined it: neither room is left.
    alice.send_line("!leave a b").await?;
    assert_eq!(
        alice.recv().await?,
        "!error You have not joined room 'b' - try !join first"
    );

    // Membership of a is intact.
    alice.send_line("!list users a").await?;
    assert_eq!(alice.recv().await?, "!list Users in 'a': alice");

    // Unknown room also aborts the batch.
    alice.send_line("!leave a nowhere").await?;
    assert_eq!(alice.recv().await?, "!error Cannot recognize room 'nowhere'");

    // A fully valid batch leaves each room with one reply per room.
    alice.send_line("!join b").await?;
    alice.recv().await?;
    alice.send_line("!leave a b").await?;
    assert_eq!(alice.recv().await?, "!leave Left room 'a'");
    assert_eq!(alice.recv().await?, "!leave Left room 'b'");
    Ok(())
}

#[tokio::test]
async fn list_rooms_excludes_im_rooms() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;
    let mut bob = logged_in(&server, "bob").await?;

    alice.send_line("!create general").await?;
    alice.recv().await?;
    alice.send_line("!create random").await?;
    alice.recv().await?;
    alice.send_line("!im bob").await?;
    alice.recv().await?;

    bob.send_line("!list rooms").await?;
    assert_eq!(bob.recv().await?, "!list Rooms: general, random");
    Ok(())
}

#[tokio::test]
async fn list_users_reports_presence() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;

    // Register bob, then log him back out by closing his session.
    let mut bob = TestClient::connect(&server.address()).await?;
    bob.login("bob", "pw").await?;
    bob.send_line("!logout").await?;
    bob.recv().await?;
    bob.expect_eof().await?;

    alice.send_line("!list users").await?;
    assert_eq!(alice.recv().await?, "!list Users: alice (online), bob (offline)");
    Ok(())
}

#[tokio::test]
async fn list_users_in_room_requires_membership() -> anyhow::Result<()> {
    let server = TestServer::spawn().await?;
    let mut alice = logged_in(&server, "alice").await?;
    let mut bob = logged_in(&server, "bob").await?;

    alice.send_line("!create general").await?;
    alice.recv().await?;
    alice.send_line("!join general").await?;
    alice.recv().await?;

    bob.send_line("!list users general").await?;
    assert_eq!(
        bob.recv().await?,
        "!error You have not joined room 'general' - try !join first"
    );

    bob.send_line("!join general").await?;
    bob.recv().await?;
    bob.send_line("!list users general").await?;
    assert_eq!(bob.recv().await?, "!list Users in 'general': alice, bob");
    Ok(())
}
