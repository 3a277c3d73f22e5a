mod connectors;
mod executor;
