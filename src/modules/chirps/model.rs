pub use chirpy_models::chirps::{Chirp, CreateChirpRequest, MAX_CHIRP_LENGTH};
