use anyhow::Result;
use clap::{Parser, Subcommand};

use snowday_core::{
    Config, FavoritesStore, JsonFavorites, Language, MessageKey, Prediction, i18n,
    provider::openweather::OpenWeatherProvider, resolve_and_fetch,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "snowday", version, about = "Snow day chance predictor")]
pub struct Cli {
    /// Message language, e.g. "en" or "hi"; overrides the configured default.
    #[arg(long, global = true)]
    pub lang: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check the snow day chance for a location.
    Check {
        /// City name, "city,country", or a bare postal code.
        query: String,

        /// Save the resolved city to favorites on success.
        #[arg(long)]
        save: bool,

        /// Print a shareable one-line summary after the result.
        #[arg(long)]
        share: bool,
    },

    /// List saved cities, or add one without running a lookup.
    Favorites {
        /// City name to add; lists favorites when absent.
        name: Option<String>,
    },

    /// Store the API key and default language.
    Configure,
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        let config = Config::load()?;

        let lang = match self.lang.as_deref() {
            Some(tag) => Language::try_from(tag)?,
            None => config.language()?,
        };

        match self.command {
            Command::Check { query, save, share } => check(&config, lang, &query, save, share).await,
            Command::Favorites { name } => favorites(lang, name.as_deref()),
            Command::Configure => configure(config),
        }
    }
}

async fn check(config: &Config, lang: Language, query: &str, save: bool, share: bool) -> Result<()> {
    let provider = OpenWeatherProvider::new(config.api_key().to_owned());

    println!("{}", i18n::text(lang, MessageKey::Checking));

    let prediction = match resolve_and_fetch(&provider, query).await {
        Ok(p) => p,
        Err(e) => anyhow::bail!(i18n::error_message(lang, &e)),
    };

    print_prediction(lang, &prediction);

    if share {
        println!();
        println!("{}", i18n::share_line(lang, &prediction.city_name, prediction.chance_percent));
    }

    if save {
        let mut store = JsonFavorites::open_default()?;
        let key = if store.add(&prediction.city_name)? {
            MessageKey::FavoriteSaved
        } else {
            MessageKey::FavoriteAlready
        };
        println!();
        println!("{}", i18n::text_with(lang, key, &prediction.city_name));
    }

    Ok(())
}

fn print_prediction(lang: Language, p: &Prediction) {
    println!();
    println!("{} — {}", p.city_name, p.condition);
    println!("{}%  {}", p.chance_percent, i18n::text(lang, MessageKey::ChanceHeadline));
    println!();
    println!("  {:<14} {} cm", i18n::text(lang, MessageKey::SnowLabel), p.snow_last_hour_cm);
    println!("  {:<14} {}°C", i18n::text(lang, MessageKey::TemperatureLabel), p.temperature_c);
    println!("  {:<14} {} m/s", i18n::text(lang, MessageKey::WindLabel), p.wind_speed_mps);
    println!("  {:<14} {}%", i18n::text(lang, MessageKey::HumidityLabel), p.humidity_pct);
    println!("  {:<14} {}°C", i18n::text(lang, MessageKey::FeelsLikeLabel), p.feels_like_c);
    println!();
    println!(
        "{}: {}",
        i18n::text(lang, MessageKey::CheckedOn),
        i18n::checked_date(lang, p.checked_at)
    );
}

fn favorites(lang: Language, name: Option<&str>) -> Result<()> {
    let mut store = JsonFavorites::open_default()?;

    match name {
        Some(name) => {
            let key = if store.add(name)? {
                MessageKey::FavoriteSaved
            } else {
                MessageKey::FavoriteAlready
            };
            println!("{}", i18n::text_with(lang, key, name));
        }
        None => {
            let names = store.list()?;
            if names.is_empty() {
                println!("{}", i18n::text(lang, MessageKey::NoFavorites));
            } else {
                for n in names {
                    println!("{n}");
                }
            }
        }
    }

    Ok(())
}

fn configure(mut config: Config) -> Result<()> {
    let api_key = inquire::Text::new("OpenWeather API key:")
        .with_help_message("Leave blank to keep the bundled free-tier key")
        .prompt()?;

    if !api_key.trim().is_empty() {
        config.set_api_key(api_key.trim().to_string());
    }

    let language = inquire::Select::new("Default language:", Language::all().to_vec()).prompt()?;
    config.set_language(language);

    config.save()?;
    println!("Saved configuration to {}", Config::config_file_path()?.display());

    Ok(())
}
