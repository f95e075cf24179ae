// SPDX-License-Identifier: MPL-2.0
use newsdeck::cli::{self, Command, Flags};
use newsdeck::config;
use newsdeck::deck::Deck;
use newsdeck::domain::news::CommentDraft;
use newsdeck::feed::FeedClient;
use newsdeck::logging;
use newsdeck::navigation::NavigationInfo;
use newsdeck::paths;
use newsdeck::reactions::ReactionLedger;
use std::process::ExitCode;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let flags = match Flags::from_env() {
        Ok(flags) => flags,
        Err(err) => {
            eprintln!("{err}\n\n{}", cli::USAGE);
            return ExitCode::FAILURE;
        }
    };
    if flags.help {
        print!("{}", cli::USAGE);
        return ExitCode::SUCCESS;
    }

    logging::init(flags.verbose);
    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    let (mut config, warning) = config::load();
    if let Some(warning) = warning {
        eprintln!("{warning}");
    }
    flags.apply_to(&mut config);

    let client = match FeedClient::from_config(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let (ledger, warning) = ReactionLedger::load();
    if let Some(warning) = warning {
        eprintln!("{warning}");
    }

    let mut deck = Deck::new(config.gesture_settings(), ledger);
    refresh(&client, config.feed_limit(), &mut deck).await;
    show(&deck);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                warn!(%err, "stdin closed");
                break;
            }
        };

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        match command {
            Command::Nothing => {}
            Command::Quit => break,
            Command::Help => println!("{}", cli::COMMANDS),
            Command::Refresh => {
                refresh(&client, config.feed_limit(), &mut deck).await;
                show(&deck);
            }
            Command::Key(key) => {
                if deck.on_key(key).is_changed() {
                    show(&deck);
                }
            }
            Command::Swipe(events) => {
                let mut changed = false;
                for event in events {
                    changed |= deck.on_gesture_event(event).1.is_changed();
                }
                if changed {
                    show(&deck);
                }
            }
            Command::Open(id) => {
                let on_screen = deck.focus(&id).is_changed()
                    || deck.current().is_some_and(|item| item.id == id);
                if on_screen {
                    show(&deck);
                    continue;
                }
                match client.get_news(&id).await {
                    Ok(item) => {
                        let mine = deck.ledger().get(&id);
                        let card = cli::render_card(Some(&item), NavigationInfo::default(), mine);
                        println!("\n(not in the loaded feed)\n{card}");
                    }
                    Err(err) => println!("{err}"),
                }
            }
            Command::React(kind) => {
                let Some(pending) = deck.react(kind) else {
                    continue;
                };
                if let Some(warning) = deck.ledger().save() {
                    warn!(%warning, "reaction not saved");
                }
                match client.send_reaction(&pending.id, pending.kind).await {
                    Ok(counts) => {
                        deck.apply_counts(&pending.id, counts);
                    }
                    Err(err) => warn!(%err, id = %pending.id, "reaction not posted"),
                }
                show(&deck);
            }
            Command::Comments => {
                let Some(id) = deck.current().map(|item| item.id.clone()) else {
                    continue;
                };
                match client.fetch_comments(&id).await {
                    Ok(comments) => println!("{}", cli::render_comments(&comments)),
                    Err(err) => println!("{err}"),
                }
            }
            Command::Comment(text) => {
                let Some(id) = deck.current().map(|item| item.id.clone()) else {
                    continue;
                };
                let draft = match CommentDraft::new(&text) {
                    Ok(draft) => draft,
                    Err(err) => {
                        println!("{err}");
                        continue;
                    }
                };
                match client.send_comment(&id, &draft).await {
                    Ok(comment_id) => {
                        info!(%id, %comment_id, "comment posted");
                        println!("Comment posted.");
                    }
                    Err(err) => println!("{err}"),
                }
            }
        }
    }

    ExitCode::SUCCESS
}

async fn refresh(client: &FeedClient, limit: u32, deck: &mut Deck) {
    let fetched = client.list_news(limit).await;
    if let Err(err) = deck.apply_fetch(fetched) {
        warn!(%err, "refresh failed, keeping the current cards");
        println!("Could not load news: {err}");
    }
}

fn show(deck: &Deck) {
    println!(
        "\n{}",
        cli::render_card(deck.current(), deck.info(), deck.my_reaction())
    );
}
