/// Path of the emitted example, relative to the project root.
pub const EXAMPLE_PATH: &str = "examples/my-first-video.tsx";

/// Canned first composition: one 3-second clip animating a generated image.
const EXAMPLE_TEMPLATE: &str = r#"/**
 * Example: Simple animated video
 * Run: bun run examples/my-first-video.tsx
 */
import { render, Render, Clip, Image, Animate } from "vargai/react";
import { fal } from "vargai/ai";

async function main() {
  console.log("Creating your first AI video...\n");

  await render(
    <Render width={720} height={720}>
      <Clip duration={3}>
        <Animate
          image={Image({
            prompt: "a friendly robot waving hello, cartoon style, blue colors",
            model: fal.imageModel("flux-schnell"),
            aspectRatio: "1:1",
          })}
          motion="robot waves hello, friendly gesture"
          model={fal.videoModel("wan-2.5")}
          duration={3}
        />
      </Clip>
    </Render>,
    {
      output: "output/my-first-video.mp4",
      cache: ".cache/ai"
    }
  );

  console.log("\nDone! Check output/my-first-video.mp4");
}

main().catch(console.error);
"#;

/// Decide what to write for the example file. Existence is the only input:
/// a present file wins, whatever its content.
pub fn rendered(already_present: bool) -> Option<&'static str> {
    if already_present {
        None
    } else {
        Some(EXAMPLE_TEMPLATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_file_gets_the_template() {
        let content = rendered(false).unwrap();
        assert!(content.contains("vargai/react"));
        assert!(content.contains("output/my-first-video.mp4"));
    }

    #[test]
    fn present_file_is_never_replaced() {
        assert!(rendered(true).is_none());
    }
}
