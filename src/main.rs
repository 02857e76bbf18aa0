use chrono::{Local, NaiveDate};
use clap::Parser;
use moodrise::application::{
    calendar, feed, init::init, log_mood, reminders, usage, ConfigService, SessionService,
};
use moodrise::cli::{output, Cli, Commands};
use moodrise::domain::{Category, Mood, Reaction};
use moodrise::error::MoodriseError;
use moodrise::infrastructure::{FileSystemRepository, MoodStore, WellnessRepository};
use std::str::FromStr;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MoodriseError> {
    match cli.command {
        Commands::Init { path } => init(&path),
        Commands::Mood { value } => {
            let (_, mut store) = open_store()?;
            match value {
                None => {
                    println!("{}", output::format_current_mood(store.current_mood()));
                    Ok(())
                }
                Some(value) => {
                    let mood = parse_mood(&value)?;
                    let started = log_mood::set_mood(&mut store, today(), mood)?;
                    println!("Mood set to {}", mood);
                    if started {
                        println!("Start mood logged for today.");
                    }
                    Ok(())
                }
            }
        }
        Commands::Checkin { mood } => {
            let (_, mut store) = open_store()?;
            let mood = parse_mood(&mood)?;
            let end_updated = log_mood::check_in(&mut store, today(), mood)?;
            println!("Mood set to {}", mood);
            if end_updated {
                println!("End mood updated for today.");
            } else {
                println!("No start mood logged today; end mood left unchanged.");
            }
            Ok(())
        }
        Commands::End { mood } => {
            let (_, mut store) = open_store()?;
            let mood = mood.as_deref().map(parse_mood).transpose()?;
            let recorded = log_mood::end_session(&mut store, today(), mood)?;
            println!("End mood recorded: {}", recorded);
            Ok(())
        }
        Commands::Status => {
            let (_, store) = open_store()?;
            println!("{}", output::format_current_mood(store.current_mood()));
            let status = usage::limit_status(&store, today());
            println!("{}", output::format_limit_status(&status));
            Ok(())
        }
        Commands::Calendar { date } => {
            let (_, store) = open_store()?;
            let date = date.as_deref().map(parse_date).transpose()?.unwrap_or(today());
            println!("{}", output::format_day_summary(&calendar::day_summary(&store, date)));
            Ok(())
        }
        Commands::Streak => {
            let (_, store) = open_store()?;
            println!("{}", output::format_streak(calendar::streak(&store, today())));
            Ok(())
        }
        Commands::Feed { category, limit } => {
            let (_, store) = open_store()?;
            let category = parse_category(&category)?;
            let cards = feed::open_feed(&store, today(), category, limit)?;
            println!("{} Feed", category);
            print!("{}", output::format_feed(&cards));
            Ok(())
        }
        Commands::Feedback { item_id, reaction } => {
            let (_, mut store) = open_store()?;
            let reaction = parse_reaction(&reaction)?;
            let score = feed::feedback(&mut store, &item_id, reaction)?;
            println!("Thanks! '{}' now has score {}", item_id, score);
            Ok(())
        }
        Commands::Hide { item_id } => {
            let (_, mut store) = open_store()?;
            feed::hide(&mut store, &item_id)?;
            println!("Hidden '{}' from future feeds", item_id);
            Ok(())
        }
        Commands::Tips { nudge } => {
            let (_, store) = open_store()?;
            let mut rng = rand::thread_rng();
            if nudge {
                println!("{}", reminders::nudge(&mut rng, &store));
            } else {
                for line in reminders::today_reminders(&mut rng, &store, Local::now().time()) {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Commands::Session { category, minutes } => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let store = MoodStore::open(repo.root())?;

            let category = parse_category(&category)?;
            let cards = feed::open_feed(&store, today(), category, 10)?;
            println!("{} Feed", category);
            print!("{}", output::format_feed(&cards));

            let mut service = SessionService::new(store, config);
            service.run(today(), minutes)
        }
        Commands::Config { key, value, list } => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (key, value) in service.list()? {
                    println!("{} = {}", key, value);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: moodrise config [--list | <key> [<value>]]");
                println!("Valid keys: daily-cap, first-check-min, check-in-interval-min");
                Ok(())
            }
        }
        Commands::Reset => {
            let (_, mut store) = open_store()?;
            store.reset_day(today())?;
            println!("Cleared today's logs and usage counter.");
            Ok(())
        }
    }
}

fn open_store() -> Result<(FileSystemRepository, MoodStore), MoodriseError> {
    let repo = FileSystemRepository::discover()?;
    let store = MoodStore::open(repo.root())?;
    Ok((repo, store))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn parse_mood(value: &str) -> Result<Mood, MoodriseError> {
    Mood::from_str(value).map_err(|_| MoodriseError::InvalidMood(value.to_string()))
}

fn parse_date(value: &str) -> Result<NaiveDate, MoodriseError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| MoodriseError::InvalidDate(value.to_string()))
}

fn parse_category(value: &str) -> Result<Category, MoodriseError> {
    Category::from_str(value).map_err(|_| MoodriseError::InvalidCategory(value.to_string()))
}

fn parse_reaction(value: &str) -> Result<Reaction, MoodriseError> {
    Reaction::from_str(value).map_err(|_| MoodriseError::InvalidReaction(value.to_string()))
}
