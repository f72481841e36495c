use anyhow::Context;
use std::io::{self, Write};
use tracing::{Subscriber, subscriber};
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, fmt::MakeWriter, layer::SubscriberExt};

/// Builds a bunyan-formatted JSON subscriber. `RUST_LOG` takes precedence
/// over `env_filter` when set.
pub fn get_subscriber<Sink>(
    name: String,
    env_filter: String,
    sink: Sink,
) -> impl Subscriber + Send + Sync
where
    Sink: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(env_filter));

    let formatting_layer = BunyanFormattingLayer::new(name, SpacedRecords::new(sink));

    Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(formatting_layer)
}

/// Installs `subscriber` globally and routes `log` records into it.
/// Fails if either has already been installed.
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), anyhow::Error> {
    LogTracer::init().context("Failed to set logger")?;
    subscriber::set_global_default(subscriber).context("Failed to set subscriber")?;
    Ok(())
}

/// Sink wrapper that leaves a blank line after every complete bunyan record,
/// so consecutive JSON records stay readable in a terminal.
pub struct SpacedRecords<M> {
    make_writer: M,
}

impl<M> SpacedRecords<M> {
    pub fn new(make_writer: M) -> Self {
        Self { make_writer }
    }
}

impl<'a, M> MakeWriter<'a> for SpacedRecords<M>
where
    M: MakeWriter<'a> + 'a,
{
    type Writer = SpacedRecordWriter<M::Writer>;

    fn make_writer(&'a self) -> Self::Writer {
        SpacedRecordWriter(self.make_writer.make_writer())
    }
}

pub struct SpacedRecordWriter<W>(W);

impl<W: Write> Write for SpacedRecordWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.write_all(buf)?;
        // Only a chunk that finishes a record gets the separator.
        if buf.ends_with(b"\n") {
            self.0.write_all(b"\n")?;
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.flush()
    }
}
