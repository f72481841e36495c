mod helpers;
mod listing;
mod preview;
