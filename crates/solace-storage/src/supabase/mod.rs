//! Similarity search through a PostgREST RPC function (Supabase + pgvector).

mod client;

pub use client::SupabaseVectorClient;
