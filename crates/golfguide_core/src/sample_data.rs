//! Hardcoded Golf Guide content.
//!
//! # Responsibility
//! - Populate a fresh catalog with the built-in groups and articles.
//!
//! # Invariants
//! - Group and item ids are unique.
//! - Items are appended one at a time, so every group's preview is maintained
//!   incrementally during population.

use crate::catalog::Catalog;
use crate::model::group::{Group, GroupFields, GroupResult};
use crate::model::item::{Item, ItemFields};
use log::info;

/// Grid span of a large tile.
const BIG_TILE: (u32, u32) = (79, 49);
/// Grid span of a small tile.
const SMALL_TILE: (u32, u32) = (53, 49);

struct GroupSeed {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    description: &'static str,
    items: &'static [ItemSeed],
}

struct ItemSeed {
    id: &'static str,
    title: &'static str,
    image: &'static str,
    tile: (u32, u32),
    body: &'static str,
}

const SEEDS: &[GroupSeed] = &[
    GroupSeed {
        id: "Group-1",
        title: "Golf Directions",
        image: "Assets/10.jpg",
        description: "Golf is a precision club and ball sport in which competing players use many \
            types of clubs to hit balls into a series of holes on a course using the fewest number \
            of strokes.",
        items: &[
            ItemSeed {
                id: "Big-Group-1-Item1",
                title: "Best Golf Courses",
                image: "Assets/11.jpg",
                tile: BIG_TILE,
                body: "Best Golf Courses: Bringing the best in every pro golfer. What makes a great \
                    golf course? Rich history, state of the art facilities and masterfully crafted \
                    landscapes.",
            },
            ItemSeed {
                id: "Small-Group-1-Item2",
                title: "Buying your Golf Club Bag",
                image: "Assets/12.jpg",
                tile: SMALL_TILE,
                body: "Buying your Golf Club Bag. Golf is one of the most popular leisure \
                    activities, played with different clubs on 9 hole or 18 hole courses.",
            },
            ItemSeed {
                id: "Big-Group-1-Item3",
                title: "Carting your Clubs Golf",
                image: "Assets/13.jpg",
                tile: BIG_TILE,
                body: "Carting your Clubs. Golf clubs are the primary equipment of anyone who plays \
                    golf. The objective is to hit the ball from the teeing area with the drive.",
            },
            ItemSeed {
                id: "Big-Group-1-Item4",
                title: "Famous golf courses",
                image: "Assets/14.jpg",
                tile: BIG_TILE,
                body: "Famous golf courses: what makes them tick? Is it the world ranking pro \
                    golfers that tee off the greens or the degree of difficulty of the course?",
            },
            ItemSeed {
                id: "Big-Group-1-Item5",
                title: "Master the Art Of Golf",
                image: "Assets/15.jpg",
                tile: BIG_TILE,
                body: "Master the Art Of Golf Club Swing. In golf, the swing can make or break your \
                    game.",
            },
            ItemSeed {
                id: "Small-Group-1-Item6",
                title: "Choosing The Right Golf Clubs",
                image: "Assets/16.jpg",
                tile: SMALL_TILE,
                body: "Choosing The Right Golf Clubs Equipment. Golf is one of the most popular \
                    individual sports in the world.",
            },
        ],
    },
    GroupSeed {
        id: "Group-2",
        title: "Perfect Golf",
        image: "Assets/20.jpg",
        description: "Golf competition is generally played for the lowest number of strokes by an \
            individual, known simply as stroke play, or the lowest score on the most individual \
            holes, known as match play.",
        items: &[
            ItemSeed {
                id: "Big-Group-2-Item1",
                title: "Why Golf Course Finders are Helpful?",
                image: "Assets/21.jpg",
                tile: BIG_TILE,
                body: "Why Golf Course Finders are Helpful. Tired of visiting the same old golf \
                    course several hours away from your home? Itching for new sights and sounds?",
            },
            ItemSeed {
                id: "Small-Group-2-Item2",
                title: "Good Golf Course Review",
                image: "Assets/22.jpg",
                tile: SMALL_TILE,
                body: "How to Write a Good Golf Course Review. For any golf fanatic it is natural \
                    to want to know as much as they can about golf courses.",
            },
            ItemSeed {
                id: "Big-Group-2-Item3",
                title: "Analyze Your Swing",
                image: "Assets/23.jpg",
                tile: BIG_TILE,
                body: "Analyze Your Swing With Golf Swing Software. Golf is one of the best sports \
                    to engage in if you are looking for a total body exercise.",
            },
            ItemSeed {
                id: "Big-Group-2-Item4",
                title: "Practice With Your Golf",
                image: "Assets/24.jpg",
                tile: BIG_TILE,
                body: "Practice With Your Golf Swing Trainer. Many golfers believe the perfect \
                    swing comes from determination, patience and a whole lot of practice.",
            },
            ItemSeed {
                id: "Big-Group-2-Item5",
                title: "Hybrid Golf Club",
                image: "Assets/25.jpg",
                tile: BIG_TILE,
                body: "Hybrid Golf Club: Swing Your Way to Victory! Playing golf involves an \
                    intricate balance of skills, equipment, weather and mood.",
            },
            ItemSeed {
                id: "Small-Group-2-Item6",
                title: "Local Golf Courses",
                image: "Assets/26.jpg",
                tile: SMALL_TILE,
                body: "Local Golf Courses: Among the best in the world. Some people think golf is \
                    an elite sport that costs a lot of money to play.",
            },
        ],
    },
];

/// Builds a catalog holding the built-in Golf Guide content.
///
/// # Errors
/// - Propagates group mutation errors; the built-in seeds never trigger them.
pub fn build_sample_catalog() -> GroupResult<Catalog> {
    let mut catalog = Catalog::new();
    let mut item_count = 0;

    for seed in SEEDS {
        let mut group = Group::new(GroupFields {
            unique_id: seed.id.to_string(),
            title: seed.title.to_string(),
            subtitle: seed.title.to_string(),
            image_path: Some(seed.image.to_string()),
            description: seed.description.to_string(),
        });

        for item in seed.items {
            let (col_span, row_span) = item.tile;
            group.push_item(Item::new(ItemFields {
                unique_id: item.id.to_string(),
                title: item.title.to_string(),
                subtitle: item.title.to_string(),
                image_path: Some(item.image.to_string()),
                description: item.body.to_string(),
                content: item.body.to_string(),
                col_span,
                row_span,
                group_id: seed.id.to_string(),
            }))?;
            item_count += 1;
        }

        catalog.add_group(group);
    }

    info!(
        "event=catalog_init module=sample_data status=ok groups={} items={}",
        catalog.groups().len(),
        item_count
    );
    Ok(catalog)
}
