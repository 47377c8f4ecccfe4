//! Build script for sdl3-node
//!
//! Handles:
//! 1. NAPI-RS setup
//! 2. Locating an SDL3 installation
//! 3. Linking SDL3 (shared by default, static with the `static` feature)

use std::env;
use std::path::{Path, PathBuf};

fn main() {
  // NAPI-RS build setup
  napi_build::setup();

  let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

  let sdl_dir = get_sdl_dir(&target_os);
  link_sdl(&sdl_dir, &target_os);

  println!("cargo:rerun-if-changed=build.rs");
  println!("cargo:rerun-if-env-changed=SDL3_DIR");
}

/// Get SDL3 installation prefix
fn get_sdl_dir(target_os: &str) -> PathBuf {
  if let Ok(dir) = env::var("SDL3_DIR") {
    return PathBuf::from(dir);
  }

  #[cfg(unix)]
  {
    if let Ok(output) = std::process::Command::new("pkg-config")
      .args(["--variable=prefix", "sdl3"])
      .output()
    {
      if output.status.success() {
        let prefix = String::from_utf8_lossy(&output.stdout);
        let path = PathBuf::from(prefix.trim());
        if path.exists() {
          return path;
        }
      }
    }
  }

  let common_paths = match target_os {
    "macos" => vec!["/opt/homebrew", "/usr/local", "/opt/local"],
    "linux" => vec!["/usr", "/usr/local", "/opt/sdl3"],
    "windows" => vec!["C:\\SDL3", "C:\\Program Files\\SDL3"],
    _ => vec![],
  };

  for path in common_paths {
    let p = PathBuf::from(path);
    if p.join("include/SDL3/SDL.h").exists() {
      return p;
    }
  }

  println!("cargo:warning=SDL3 not found. Set SDL3_DIR environment variable or install SDL3.");
  PathBuf::from("/usr/local")
}

fn link_sdl(sdl_dir: &Path, target_os: &str) {
  let lib_dir = sdl_dir.join("lib");
  println!("cargo:rustc-link-search=native={}", lib_dir.display());

  if cfg!(feature = "static") {
    let static_lib = lib_dir.join("libSDL3.a");
    if !static_lib.exists() {
      panic!(
        "Static library libSDL3.a not found at {}. \
         Build SDL3 with SDL_STATIC=ON or set SDL3_DIR.",
        lib_dir.display()
      );
    }
    println!("cargo:rustc-link-lib=static=SDL3");
    link_platform_libraries(target_os);
  } else {
    println!("cargo:rustc-link-lib=SDL3");
    // Let the addon find a relocated libSDL3 next to itself
    if target_os == "linux" {
      println!("cargo:rustc-link-arg=-Wl,-rpath,$ORIGIN");
    }
  }
}

/// Libraries a static SDL3 pulls in
fn link_platform_libraries(target_os: &str) {
  match target_os {
    "macos" => {
      let frameworks = [
        "AVFoundation",
        "AudioToolbox",
        "Carbon",
        "Cocoa",
        "CoreAudio",
        "CoreFoundation",
        "CoreHaptics",
        "CoreMedia",
        "CoreVideo",
        "ForceFeedback",
        "GameController",
        "IOKit",
        "Metal",
        "QuartzCore",
        "UniformTypeIdentifiers",
      ];
      for framework in &frameworks {
        println!("cargo:rustc-link-lib=framework={}", framework);
      }
      println!("cargo:rustc-link-lib=iconv");
    }

    "linux" => {
      for lib in ["m", "pthread", "dl"] {
        println!("cargo:rustc-link-lib={}", lib);
      }
    }

    "windows" => {
      let libs = [
        "user32", "gdi32", "winmm", "imm32", "ole32", "oleaut32", "version", "uuid", "advapi32",
        "setupapi", "shell32",
      ];
      for lib in &libs {
        println!("cargo:rustc-link-lib={}", lib);
      }
    }

    _ => {
      println!("cargo:warning=Unknown target OS: {}", target_os);
    }
  }
}
