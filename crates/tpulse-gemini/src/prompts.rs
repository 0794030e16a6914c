//! Prompt construction for the generative text service.

/// Characters of a video description included in a demographics prompt.
pub const DESCRIPTION_CHAR_LIMIT: usize = 500;

/// The first `limit` characters of `text`, on a char boundary.
pub fn truncate_chars(text: &str, limit: usize) -> &str {
    match text.char_indices().nth(limit) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Prompt asking for the likely core audience of a video.
pub fn demographics_prompt(title: &str, description: &str, category_name: &str) -> String {
    let description = truncate_chars(description, DESCRIPTION_CHAR_LIMIT);
    format!(
        r#"Based on the title and description of the following YouTube video, estimate the core audience expected to watch it (gender and age groups).

Video title: "{title}"
Video description: "{description}..."

Respond with a single JSON object in this format:
{{
  "gender": [
    {{ "name": "male", "value": 0 }},
    {{ "name": "female", "value": 0 }}
  ],
  "age": [
    {{ "name": "teens", "value": 0 }},
    {{ "name": "20s", "value": 0 }},
    {{ "name": "30s", "value": 0 }},
    {{ "name": "40s", "value": 0 }},
    {{ "name": "50+", "value": 0 }}
  ],
  "categoryName": "existing category name"
}}

- The gender values must sum to 100 and the age values must sum to 100.
- Keep categoryName as "{category_name}" or replace it with a more fitting category.
"#
    )
}

/// Prompt asking for the hot topics across a batch of trending titles.
pub fn hot_keywords_prompt(titles: &[&str]) -> String {
    let titles = titles.join("\n");
    format!(
        r#"The following is a list of titles of currently trending YouTube videos.
Analyze the list and pick the 5 keywords (people, brands, events, catchphrases) that are the biggest talking points right now.

Video list:
{titles}

Return a JSON array with one object per keyword containing:
1. term: the keyword (e.g. "NewJeans", "ChatGPT")
2. growth: estimated growth rate (e.g. "+150%")
3. description: one sentence explaining why the keyword is rising
4. trend: 6 numbers between 0 and 100 forming a sample trend line that rises towards the most recent point

Response format:
[
  {{ "term": "keyword", "growth": "+00%", "description": "explanation", "trend": [10, 20, 30, 40, 50, 60] }}
]
"#
    )
}

/// Prompt asking for a tagline and three popularity factors.
pub fn summary_prompt(title: &str, description: &str) -> String {
    format!(
        r#"Perform a trend analysis of the following YouTube video based on its title and description.

Video title: {title}
Video description: {description}

Requirements:
1. Write an intuitive, catchy one-line summary that would grab a viewer's attention.
2. Explain in exactly 3 sentences the specific reasons this video is popular right now.

JSON response format:
{{
  "oneLiner": "one-line summary",
  "popularFactor": ["reason 1", "reason 2", "reason 3"]
}}
"#
    )
}
