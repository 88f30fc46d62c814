mod athlete;
mod gameday;
mod performance;
mod season;
