mod athlete;
mod discipline;
mod event;
mod gameday;
mod performance;
mod season;
mod seed;
