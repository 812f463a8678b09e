//! `exchange` commands: drive a `RateExchange` and print what it broadcasts.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use exchange_rates::{
    Broadcast, CurrencyCode, DecisionBot, DisplayBoard, RateExchange, RateFeed, ThresholdNotifier,
};

/// The three standard subscribers, kept so callers can remove them later.
pub struct Subscribers {
    pub board: Rc<RefCell<DisplayBoard>>,
    pub notifier: Rc<RefCell<ThresholdNotifier>>,
    pub bot: Rc<RefCell<DecisionBot>>,
}

impl Subscribers {
    pub fn new(quote: &CurrencyCode, watch: CurrencyCode) -> Self {
        Self {
            board: Rc::new(RefCell::new(DisplayBoard::new(quote.clone()))),
            notifier: Rc::new(RefCell::new(
                ThresholdNotifier::new(watch).with_quote(quote.clone()),
            )),
            bot: Rc::new(RefCell::new(DecisionBot::default())),
        }
    }

    /// Registers all three, in board, notifier, bot order.
    pub fn register_all<W: Write>(&self, exchange: &mut RateExchange, out: &mut W) -> io::Result<()> {
        let added = [
            exchange.register(self.board.clone()),
            exchange.register(self.notifier.clone()),
            exchange.register(self.bot.clone()),
        ];
        for line in added.into_iter().flatten() {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}

fn print_broadcast<W: Write>(out: &mut W, broadcast: &Broadcast) -> io::Result<()> {
    writeln!(out)?;
    for line in broadcast.lines() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn set_and_print<W: Write>(
    exchange: &mut RateExchange,
    out: &mut W,
    currency: CurrencyCode,
    rate: f64,
) -> io::Result<()> {
    let broadcast = exchange.set_rate(currency, rate);
    print_broadcast(out, &broadcast)
}

fn code(s: &str) -> io::Result<CurrencyCode> {
    s.parse().map_err(io::Error::other)
}

/// Replays the scripted scenario: three rate changes, the board leaves,
/// one more change.
pub fn run_demo<W: Write>(out: &mut W, quote: &CurrencyCode) -> io::Result<()> {
    let mut exchange = RateExchange::new();
    let (usd, eur) = (code("USD")?, code("EUR")?);
    let subscribers = Subscribers::new(quote, usd.clone());
    subscribers.register_all(&mut exchange, out)?;

    set_and_print(&mut exchange, out, usd.clone(), 89.50)?;
    set_and_print(&mut exchange, out, eur.clone(), 98.75)?;
    set_and_print(&mut exchange, out, usd, 89.55)?;

    if let Some(line) = exchange.remove(&subscribers.board) {
        writeln!(out)?;
        writeln!(out, "{}", line)?;
    }

    set_and_print(&mut exchange, out, eur, 101.20)
}

/// Applies `updates` in order with the standard subscribers registered.
pub fn run_updates<W: Write>(
    out: &mut W,
    quote: &CurrencyCode,
    watch: CurrencyCode,
    updates: Vec<(CurrencyCode, f64)>,
) -> io::Result<()> {
    let mut exchange = RateExchange::new();
    Subscribers::new(quote, watch).register_all(&mut exchange, out)?;

    for (currency, rate) in updates {
        set_and_print(&mut exchange, out, currency, rate)?;
    }
    Ok(())
}

/// Feeds `ticks` rounds of simulated rates through the exchange.
pub fn run_simulation<W: Write>(
    out: &mut W,
    quote: &CurrencyCode,
    watch: CurrencyCode,
    mut feed: RateFeed,
    ticks: usize,
) -> io::Result<()> {
    let mut exchange = RateExchange::new();
    Subscribers::new(quote, watch).register_all(&mut exchange, out)?;

    for tick in 0..ticks {
        tracing::debug!(tick, "simulated tick");
        for (currency, rate) in feed.tick() {
            set_and_print(&mut exchange, out, currency, rate)?;
        }
    }
    Ok(())
}
