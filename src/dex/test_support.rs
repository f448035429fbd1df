//! Mock PokeAPI fixtures shared by the aggregation tests.

use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

const API: &str = "https://pokeapi.co/api/v2";

pub(crate) async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

fn language(code: &str) -> Value {
    json!({ "name": code, "url": format!("{}/language/{}/", API, code) })
}

/// `types` and `abilities` are `(resource id, slot)` pairs.
pub(crate) fn pokemon_json(
    id: u32,
    name: &str,
    weight: u32,
    height: u32,
    types: &[(u32, u8)],
    abilities: &[(u32, u8)],
) -> Value {
    json!({
        "id": id,
        "name": name,
        "weight": weight,
        "height": height,
        "species": { "name": name, "url": format!("{}/pokemon-species/{}/", API, id) },
        "sprites": {
            "front_default": format!("https://img/{}.png", id),
            "front_shiny": format!("https://img/shiny/{}.png", id),
            "other": { "official-artwork": {
                "front_default": format!("https://img/official/{}.png", id),
                "front_shiny": format!("https://img/official/shiny/{}.png", id)
            }}
        },
        "types": types.iter().map(|(type_id, slot)| json!({
            "slot": slot,
            "type": { "name": format!("type-{}", type_id), "url": format!("{}/type/{}/", API, type_id) }
        })).collect::<Vec<_>>(),
        "abilities": abilities.iter().map(|(ability_id, slot)| json!({
            "slot": slot,
            "is_hidden": *slot == 3,
            "ability": { "name": format!("ability-{}", ability_id), "url": format!("{}/ability/{}/", API, ability_id) }
        })).collect::<Vec<_>>()
    })
}

pub(crate) fn species_json(id: u32, ko_name: &str, chain_id: u32) -> Value {
    species_json_with_flavor(id, ko_name, chain_id, "등에\n씨앗이 있다.")
}

pub(crate) fn species_json_with_flavor(id: u32, ko_name: &str, chain_id: u32, flavor: &str) -> Value {
    let flavor_entries = if flavor.is_empty() {
        Vec::new()
    } else {
        vec![json!({ "flavor_text": flavor, "language": language("ko"), "version": null })]
    };

    json!({
        "id": id,
        "name": format!("species-{}", id),
        "names": [
            { "name": format!("Species {}", id), "language": language("en") },
            { "name": ko_name, "language": language("ko") }
        ],
        "genera": [{ "genus": "씨앗포켓몬", "language": language("ko") }],
        "flavor_text_entries": flavor_entries,
        "evolution_chain": { "url": format!("{}/evolution-chain/{}/", API, chain_id) }
    })
}

pub(crate) fn type_json(id: u32, api_name: &str, ko_name: &str, members: &[u32]) -> Value {
    json!({
        "id": id,
        "name": api_name,
        "names": [{ "name": ko_name, "language": language("ko") }],
        "pokemon": members.iter().map(|m| json!({
            "slot": 1,
            "pokemon": { "name": format!("pokemon-{}", m), "url": format!("{}/pokemon/{}/", API, m) }
        })).collect::<Vec<_>>()
    })
}

pub(crate) fn ability_json(id: u32, api_name: &str, ko_name: &str) -> Value {
    json!({
        "id": id,
        "name": api_name,
        "names": [{ "name": ko_name, "language": language("ko") }]
    })
}

/// Bulbasaur, Ivysaur and Venusaur with their species, chain, types and
/// abilities. Pokemon are reachable by id and by name. Grass (12) also lists
/// Mega Venusaur (10033), which is not mounted.
pub(crate) async fn mount_bulbasaur_line(server: &MockServer) {
    let line = [
        (1, "bulbasaur", "이상해씨", 69, 7),
        (2, "ivysaur", "이상해풀", 130, 10),
        (3, "venusaur", "이상해꽃", 1000, 20),
    ];

    for (id, name, ko_name, weight, height) in line {
        let body = pokemon_json(id, name, weight, height, &[(12, 1), (4, 2)], &[(65, 1), (34, 3)]);
        mount_json(server, &format!("/pokemon/{}", id), body.clone()).await;
        mount_json(server, &format!("/pokemon/{}", name), body).await;
        mount_json(server, &format!("/pokemon-species/{}", id), species_json(id, ko_name, 1)).await;
    }

    let species = |name: &str, id: u32| json!({ "name": name, "url": format!("{}/pokemon-species/{}/", API, id) });
    mount_json(
        server,
        "/evolution-chain/1",
        json!({
            "id": 1,
            "chain": {
                "species": species("bulbasaur", 1),
                "evolves_to": [{
                    "species": species("ivysaur", 2),
                    "evolves_to": [{ "species": species("venusaur", 3), "evolves_to": [] }]
                }]
            }
        }),
    )
    .await;

    mount_json(server, "/type/12", type_json(12, "grass", "풀", &[1, 2, 3, 10033])).await;
    mount_json(server, "/type/4", type_json(4, "poison", "독", &[1, 2, 3])).await;
    mount_json(server, "/ability/65", ability_json(65, "overgrow", "심록")).await;
    mount_json(server, "/ability/34", ability_json(34, "chlorophyll", "엽록소")).await;
}
