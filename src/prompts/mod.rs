pub mod korok_persona_prompt;
