pub mod prune_restores;
