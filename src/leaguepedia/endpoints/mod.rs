mod games;
mod players;
mod teams;
mod tournaments;
