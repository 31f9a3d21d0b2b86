use std::fs;
use std::path::Path;

use anyhow::Context;
use pest::Parser;
use pest_derive::Parser;

use super::memory::{DEFAULT_RAM_SIZE, MEMMAX};
use super::video::{VideoRegion, DEFAULT_SCREEN_HEIGHT, DEFAULT_SCREEN_WIDTH, DEFAULT_VIDEO_START};
use super::AppResult;

#[derive(Parser)]
#[grammar = "config.pest"]
struct ConfigParser;

/*
 * Config
 * Machine description read at startup. Every key is optional, a missing,
 * malformed or out of range value leaves the default in place.
 *
 * RamSize      <decimal>       memory size in bytes, 1 to 65536
 * VideoStart   <hexadecimal>   first byte of the video plane, 0x prefix optional
 * ScreenWidth  <decimal>       characters per row
 * ScreenHeight <decimal>       number of rows
 */
#[derive(Debug, Eq, PartialEq, Copy, Clone, Hash)]
pub struct Config {
    pub ram_size: usize,
    pub video_start: u16,
    pub screen_width: usize,
    pub screen_height: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ram_size: DEFAULT_RAM_SIZE,
            video_start: DEFAULT_VIDEO_START,
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
        }
    }
}

impl Config {
    pub fn parse(text: &str) -> Config {
        let mut config = Config::default();

        for line in text.lines() {
            if let Some((key, value)) = parse_entry(line) {
                config.set(key, value);
            }
        }

        config
    }

    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Config> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("could not read configuration file '{}'", path.display()))?;

        Ok(Config::parse(&text))
    }

    pub fn video_region(&self) -> VideoRegion {
        VideoRegion {
            start: self.video_start,
            width: self.screen_width,
            height: self.screen_height,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "RamSize" => {
                if let Some(size) = parse_decimal(value).filter(|s| (1..=MEMMAX).contains(s)) {
                    self.ram_size = size;
                }
            }
            "VideoStart" => {
                if let Some(start) = parse_hexadecimal(value) {
                    self.video_start = start;
                }
            }
            "ScreenWidth" => {
                if let Some(width) = parse_decimal(value).filter(|w| (1..=MEMMAX).contains(w)) {
                    self.screen_width = width;
                }
            }
            "ScreenHeight" => {
                if let Some(height) = parse_decimal(value).filter(|h| (1..=MEMMAX).contains(h)) {
                    self.screen_height = height;
                }
            }
            _ => {}
        }
    }
}

fn parse_entry(line: &str) -> Option<(&str, &str)> {
    let pair = ConfigParser::parse(Rule::line, line).ok()?.next()?;
    if pair.as_rule() != Rule::entry {
        return None;
    }
    let mut inner = pair.into_inner();
    let key = inner.next()?.as_str();
    let value = inner.next()?.as_str();

    Some((key, value))
}

fn parse_decimal(value: &str) -> Option<usize> {
    value.parse::<usize>().ok()
}

fn parse_hexadecimal(value: &str) -> Option<u16> {
    let digits = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    u16::from_str_radix(digits, 16).ok()
}
