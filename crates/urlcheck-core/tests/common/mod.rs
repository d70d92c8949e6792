pub mod scripted_checker;
